//! Record store for the persistence variant
//!
//! Attendance records are append-only rows in a single sqlite table. The
//! store is reached through the `RecordStore` trait so handlers stay
//! testable without a real database.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

mod store;
pub use store::{RecordStore, SqliteStore};

/// Connect to the record store, creating the database file and schema on
/// first use.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    init_schema(&pool).await?;
    info!("Connected to record store: {}", url);
    Ok(pool)
}

/// Create the attendance_records table if it does not exist.
///
/// Required fields and the confidence range are enforced here so a bad
/// insert fails the same way regardless of which code path produced it.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_records (
            id TEXT PRIMARY KEY,
            student_id TEXT NOT NULL CHECK (length(student_id) > 0),
            capture_timestamp TEXT NOT NULL,
            confidence_score REAL NOT NULL
                CHECK (confidence_score >= 0.0 AND confidence_score <= 1.0),
            attendance_status TEXT NOT NULL DEFAULT 'present',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
