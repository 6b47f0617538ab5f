//! Record store trait and sqlite implementation

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::AttendanceRecord;

/// Capability to durably append one attendance record.
///
/// Inserts are independent appends; implementations must tolerate
/// concurrent calls without read-modify-write coordination. The returned
/// record carries the stored values (generated id, resolved timestamps).
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: AttendanceRecord) -> Result<AttendanceRecord>;
}

/// sqlite-backed record store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn insert(&self, record: AttendanceRecord) -> Result<AttendanceRecord> {
        // Missing required fields surface as constraint violations here,
        // which the handler maps to a 500 with the store diagnostic.
        sqlx::query(
            r#"
            INSERT INTO attendance_records (
                id, student_id, capture_timestamp,
                confidence_score, attendance_status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.student_id)
        .bind(record.capture_timestamp.to_rfc3339())
        .bind(record.confidence_score)
        .bind(record.attendance_status.as_str())
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(record)
    }
}
