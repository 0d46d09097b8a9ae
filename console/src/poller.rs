use std::sync::Arc;
use std::time::Duration;

use kernel::{
    alert::{AlertLevel, AlertSink},
    model::notification::NotificationKey,
    repository::notification::NotificationRepository,
};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Recurring, cancellable fetch of the latest hardware notification.
/// Polling is best-effort: fetch failures are logged and the schedule
/// keeps running. Idle → Polling on [`NotificationPoller::start`],
/// Polling → Stopped on [`PollerHandle::stop`].
pub struct NotificationPoller {
    notification_repository: Arc<dyn NotificationRepository>,
    alert_sink: Arc<dyn AlertSink>,
    interval: Duration,
}

impl NotificationPoller {
    pub fn new(
        notification_repository: Arc<dyn NotificationRepository>,
        alert_sink: Arc<dyn AlertSink>,
        interval: Duration,
    ) -> Self {
        Self {
            notification_repository,
            alert_sink,
            interval,
        }
    }

    pub fn start(self) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(shutdown_rx));
        PollerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }

    async fn run(self, mut shutdown: watch::Receiver<bool>) {
        // First tick fires one full period after start, like the
        // view's original schedule.
        let mut ticker = time::interval_at(time::Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_surfaced: Option<NotificationKey> = None;

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => self.tick(&mut last_surfaced, &shutdown).await,
            }
        }
        tracing::debug!("notification poller stopped");
    }

    /// One polling step. Surfaces the latest notification only when
    /// its subject is non-empty and it differs from the last surfaced
    /// one. A result arriving after cancellation is discarded.
    pub(crate) async fn tick(
        &self,
        last_surfaced: &mut Option<NotificationKey>,
        shutdown: &watch::Receiver<bool>,
    ) {
        let latest = match self.notification_repository.find_latest().await {
            Ok(latest) => latest,
            Err(error) => {
                tracing::debug!(%error, "notification poll failed");
                return;
            }
        };
        if *shutdown.borrow() {
            return;
        }
        let Some(notification) = latest else { return };
        if notification.subject.is_empty() {
            return;
        }
        let key = notification.dedup_key();
        if last_surfaced.as_ref() == Some(&key) {
            return;
        }
        self.alert_sink.alert(
            AlertLevel::Info,
            &format!("Room Entry: {}", notification.subject),
        );
        *last_surfaced = Some(key);
    }
}

pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Cancels the recurring schedule and waits for the task to wind
    /// down. No tick fires afterwards; a tick already in flight
    /// discards its result.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
