//! attendance-api - Simulated biometric attendance registration endpoint
//!
//! Accepts attendance events over HTTP, applies the confidence threshold,
//! injects randomized failure/status outcomes for integration testing, and
//! optionally persists each result to a record store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use attendance_api::config::Config;
use attendance_api::random::ThreadRngSource;
use attendance_api::{build_router, db, AppState};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Attendance API (attendance-api) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::parse();

    let store: Option<Arc<dyn db::RecordStore>> = match &config.database_url {
        Some(url) => {
            let pool = db::connect(url).await?;
            info!("Persistence variant active (POST /api/presences)");
            Some(Arc::new(db::SqliteStore::new(pool)))
        }
        None => {
            info!("Echo variant active (POST /api/register_attendance)");
            None
        }
    };

    let state = AppState::new(Arc::new(ThreadRngSource), store);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.resolve_port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("attendance-api listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
