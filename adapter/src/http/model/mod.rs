pub mod access;
pub mod log;
pub mod notification;
pub mod room;
pub mod user;

use chrono::{DateTime, NaiveDateTime, Utc};

// The service emits naive ISO-8601 timestamps (`datetime.isoformat()`
// without an offset) but RFC 3339 also appears behind some proxies.
// Unparseable values fall back to the epoch with a warning; ordering
// is server-assigned, so nothing downstream sorts by this value.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    tracing::warn!(raw, "unparseable timestamp in service response");
    DateTime::<Utc>::UNIX_EPOCH
}
