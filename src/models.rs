//! Attendance data types
//!
//! The inbound event is deliberately permissive: only `confidence` is ever
//! validated, and absent fields stay absent through the echo path. The
//! persisted record enforces its required fields at the store boundary
//! instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound attendance event as submitted by the caller.
///
/// All fields are optional at the wire level; missing fields are omitted
/// again when the event is echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    /// ISO-8601 string or epoch milliseconds, passed through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Claimed certainty of the biometric match, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Outcome of an attendance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    DisciplineNotFound,
    AlreadyPresent,
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        AttendanceStatus::Present
    }
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::DisciplineNotFound => "discipline_not_found",
            AttendanceStatus::AlreadyPresent => "already_present",
        }
    }
}

/// Persisted attendance record. Append-only: never updated, never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    /// Required by the store; `None` here fails the insert.
    pub student_id: Option<String>,
    pub capture_timestamp: DateTime<Utc>,
    /// Required by the store, range-checked to [0, 1] there.
    pub confidence_score: Option<f64>,
    pub attendance_status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Build a record from a validated event and its assigned status.
    ///
    /// The capture timestamp falls back to the time of receipt when the
    /// event carries no parseable timestamp.
    pub fn from_event(event: &AttendanceEvent, status: AttendanceStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            student_id: event
                .student_id
                .as_deref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            capture_timestamp: parse_capture_timestamp(event.timestamp.as_deref()).unwrap_or(now),
            confidence_score: event.confidence,
            attendance_status: status,
            created_at: now,
        }
    }
}

/// Parse the submitted timestamp as RFC 3339, then as epoch milliseconds.
fn parse_capture_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }
    None
}
