use chrono::{DateTime, Utc};

/// Transient hardware-sourced signal (badge read, face match). The
/// client only ever reads the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub message: Option<String>,
    pub kind: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Identity used to suppress repeat alerts for an already-surfaced
/// notification. Keyed on fields the feed always carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationKey {
    pub timestamp: Option<DateTime<Utc>>,
    pub subject: String,
}

impl Notification {
    pub fn dedup_key(&self) -> NotificationKey {
        NotificationKey {
            timestamp: self.timestamp,
            subject: self.subject.clone(),
        }
    }
}
