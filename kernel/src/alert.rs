/// Outbound port for user-facing alerts (the presentation layer's
/// toast ticker). Implementations must tolerate interleaved calls
/// from the sync engine and the notification poller.
pub trait AlertSink: Send + Sync {
    fn alert(&self, level: AlertLevel, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}
