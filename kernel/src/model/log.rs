use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable activity-log record scoped to one room. Ordering is
/// server-assigned and preserved as returned, never re-sorted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Server-assigned id (a UUID string).
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub action: LogAction,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    Grant,
    Revoke,
    RoomEntry,
}
