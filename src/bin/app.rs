use std::sync::Arc;

use anyhow::{Context, Result};
use console::{poller::NotificationPoller, store::AccessStore, sync::SyncEngine};
use kernel::repository::health::HealthRepository as _;
use kernel::repository::user::UserRepository as _;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let registry = AppRegistry::new(&app_config)?;

    registry
        .health_repository()
        .check()
        .await
        .context("access service is unreachable")?;

    let store = Arc::new(AccessStore::new());
    let engine = Arc::new(SyncEngine::new(
        store.clone(),
        registry.room_repository(),
        registry.user_repository(),
        registry.access_repository(),
        registry.log_repository(),
        registry.alert_sink(),
    ));

    engine
        .refresh_all()
        .await
        .context("initial synchronization failed")?;

    let badge_users = registry.user_repository().find_badge_all().await?;
    let face_users = registry.user_repository().find_face_all().await?;
    tracing::info!(
        rooms = store.rooms().len(),
        badge_users = badge_users.len(),
        face_users = face_users.len(),
        "initial facility state loaded"
    );

    let poller = NotificationPoller::new(
        registry.notification_repository(),
        registry.alert_sink(),
        app_config.poller.interval,
    );
    let poller_handle = poller.start();

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for the shutdown signal")?;
    tracing::info!("shutting down");
    poller_handle.stop().await;
    Ok(())
}
