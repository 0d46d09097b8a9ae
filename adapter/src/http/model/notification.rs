use kernel::model::notification::Notification;
use serde::Deserialize;

use super::parse_timestamp;

// `/notifications/latest` may return an empty object when the feed is
// empty, so every field is defaulted.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationRow {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            subject,
            message,
            kind,
            timestamp,
        } = value;
        Notification {
            subject,
            message,
            kind,
            timestamp: timestamp.as_deref().map(parse_timestamp),
        }
    }
}
