use kernel::alert::{AlertLevel, AlertSink};

/// Alert sink for headless operation: alerts land in the log stream
/// under the `alert` target instead of a toast ticker.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn alert(&self, level: AlertLevel, message: &str) {
        match level {
            AlertLevel::Info | AlertLevel::Success => {
                tracing::info!(target: "alert", "{message}")
            }
            AlertLevel::Warning => tracing::warn!(target: "alert", "{message}"),
            AlertLevel::Error => tracing::error!(target: "alert", "{message}"),
        }
    }
}
