//! Attendance registration handlers
//!
//! Two variants of the same flow, selected at startup by configuration:
//! the echo variant answers with the submitted fields, the persistence
//! variant writes a record first and answers with the stored values.
//! Request and response payloads are dumped to the log for manual testing.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{AttendanceEvent, AttendanceRecord, AttendanceStatus};
use crate::simulation::{self, CONFIDENCE_THRESHOLD};
use crate::AppState;

/// Success body for the echo variant: the submitted fields plus the
/// assigned status. Absent input fields stay absent in the echo.
#[derive(Debug, Serialize)]
pub struct AttendanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub attendance_status: AttendanceStatus,
}

/// Success body for the persistence variant: the stored record's values,
/// not the raw input.
#[derive(Debug, Serialize)]
pub struct PresenceResponse {
    pub id: Uuid,
    pub student_id: String,
    pub timestamp: DateTime<Utc>,
    pub confidence: f64,
    pub attendance_status: AttendanceStatus,
}

/// POST /api/register_attendance
///
/// Validate the confidence gate, run the simulated outcome, echo the input.
pub async fn register_attendance(
    State(state): State<AppState>,
    Json(event): Json<AttendanceEvent>,
) -> Result<(StatusCode, Json<AttendanceResponse>)> {
    log_request("/api/register_attendance", &event);

    validate_confidence(&event)?;
    let status = simulation::simulate_outcome(state.random.as_ref())?;

    let response = AttendanceResponse {
        student_id: event.student_id,
        timestamp: event.timestamp,
        confidence: event.confidence,
        attendance_status: status,
    };
    log_response(&response);

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/presences
///
/// Same flow, but a record is persisted before responding and the response
/// carries the stored timestamp and confidence.
pub async fn register_presence(
    State(state): State<AppState>,
    Json(event): Json<AttendanceEvent>,
) -> Result<(StatusCode, Json<PresenceResponse>)> {
    log_request("/api/presences", &event);

    validate_confidence(&event)?;
    let status = simulation::simulate_outcome(state.random.as_ref())?;

    let store = state
        .store
        .as_ref()
        .ok_or_else(|| Error::Http("no record store configured".to_string()))?;
    let stored = store
        .insert(AttendanceRecord::from_event(&event, status))
        .await?;

    let response = PresenceResponse {
        id: stored.id,
        // The store enforces presence of these fields; a record that made
        // it through insert always carries them.
        student_id: stored.student_id.unwrap_or_default(),
        timestamp: stored.capture_timestamp,
        confidence: stored.confidence_score.unwrap_or_default(),
        attendance_status: stored.attendance_status,
    };
    log_response(&response);

    Ok((StatusCode::CREATED, Json(response)))
}

/// The only validation performed: a submitted confidence below threshold is
/// rejected. An absent confidence passes the gate unchecked, matching the
/// source behavior this service reproduces.
fn validate_confidence(event: &AttendanceEvent) -> Result<()> {
    match event.confidence {
        Some(confidence) if confidence < CONFIDENCE_THRESHOLD => {
            Err(Error::InsufficientConfidence)
        }
        _ => Ok(()),
    }
}

fn log_request(path: &str, event: &AttendanceEvent) {
    info!(
        "REQUEST POST {}: {}",
        path,
        serde_json::to_string(event).unwrap_or_else(|_| "<unserializable>".to_string())
    );
}

fn log_response<T: Serialize + std::fmt::Debug>(response: &T) {
    info!(
        "RESPONSE SUCCESS: {}",
        serde_json::to_string(response).unwrap_or_else(|_| format!("{:?}", response))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INSUFFICIENT_CONFIDENCE_MESSAGE;

    #[test]
    fn low_confidence_is_rejected_with_fixed_message() {
        let event = AttendanceEvent {
            student_id: None,
            timestamp: None,
            confidence: Some(0.94),
        };
        let err = validate_confidence(&event).unwrap_err();
        assert_eq!(err.to_string(), INSUFFICIENT_CONFIDENCE_MESSAGE);
    }

    #[test]
    fn threshold_confidence_is_accepted() {
        let event = AttendanceEvent {
            student_id: None,
            timestamp: None,
            confidence: Some(0.95),
        };
        assert!(validate_confidence(&event).is_ok());
    }

    #[test]
    fn absent_confidence_passes_the_gate() {
        let event = AttendanceEvent {
            student_id: None,
            timestamp: None,
            confidence: None,
        };
        assert!(validate_confidence(&event).is_ok());
    }
}
