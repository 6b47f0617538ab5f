//! Error types for attendance-api
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation, plus the HTTP mapping that renders every API error as a
//! JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Fixed message returned when the confidence score is below threshold.
pub const INSUFFICIENT_CONFIDENCE_MESSAGE: &str =
    "Insufficient confidence. The 'confidence' value must be greater than or equal to 0.95.";

/// Generic message returned with every 500 response.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Failed to register attendance.";

/// Diagnostic carried by the randomly injected critical failure.
pub const SIMULATED_FAILURE_DIAGNOSTIC: &str = "Simulated critical system failure.";

/// Main error type for attendance-api
#[derive(Error, Debug)]
pub enum Error {
    /// Confidence score below the acceptance threshold
    #[error("{INSUFFICIENT_CONFIDENCE_MESSAGE}")]
    InsufficientConfidence,

    /// Randomly injected failure simulating downstream system breakage
    #[error("Simulated failure: {0}")]
    SimulatedFailure(String),

    /// Record store connection or insert errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("HTTP server error: {0}")]
    Http(String),

    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type using attendance-api Error
pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::InsufficientConfidence => (
                StatusCode::BAD_REQUEST,
                json!({ "message": INSUFFICIENT_CONFIDENCE_MESSAGE }),
            ),
            Error::SimulatedFailure(diagnostic) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": REGISTRATION_FAILED_MESSAGE, "error": diagnostic }),
            ),
            Error::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": REGISTRATION_FAILED_MESSAGE, "error": e.to_string() }),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": REGISTRATION_FAILED_MESSAGE, "error": other.to_string() }),
            ),
        };

        error!("RESPONSE ERROR {}: {}", status.as_u16(), body);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_confidence_maps_to_400_with_fixed_message() {
        let response = Error::InsufficientConfidence.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn simulated_failure_maps_to_500() {
        let response =
            Error::SimulatedFailure(SIMULATED_FAILURE_DIAGNOSTIC.to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
