use kernel::model::log::{LogAction, LogEntry};
use serde::Deserialize;

use super::parse_timestamp;

#[derive(Debug, Deserialize)]
pub struct LogRow {
    #[serde(default)]
    pub id: String,
    pub timestamp: String,
    pub action: LogAction,
    #[serde(default)]
    pub subject: Option<String>,
}

impl From<LogRow> for LogEntry {
    fn from(value: LogRow) -> Self {
        let LogRow {
            id,
            timestamp,
            action,
            subject,
        } = value;
        LogEntry {
            id,
            timestamp: parse_timestamp(&timestamp),
            action,
            subject,
        }
    }
}
