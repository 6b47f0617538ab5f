//! attendance-api library
//!
//! A stateless HTTP endpoint that accepts simulated biometric attendance
//! events, applies a confidence threshold, injects randomized outcomes, and
//! optionally persists a record before responding.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod random;
pub mod simulation;

pub use error::{Error, Result};

use db::RecordStore;
use random::RandomSource;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Source of the simulated-outcome draws
    pub random: Arc<dyn RandomSource>,
    /// Record store; its presence selects the persistence variant
    pub store: Option<Arc<dyn RecordStore>>,
}

impl AppState {
    pub fn new(random: Arc<dyn RandomSource>, store: Option<Arc<dyn RecordStore>>) -> Self {
        Self { random, store }
    }
}

/// Build application router
///
/// The registration route depends on the variant: `/api/register_attendance`
/// echoes input, `/api/presences` persists first. Exactly one is mounted.
/// CORS is open for all origins.
pub fn build_router(state: AppState) -> Router {
    let registration = if state.store.is_some() {
        Router::new().route("/api/presences", post(api::attendance::register_presence))
    } else {
        Router::new().route(
            "/api/register_attendance",
            post(api::attendance::register_attendance),
        )
    };

    registration
        .merge(api::health::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
