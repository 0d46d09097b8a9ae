use std::sync::Arc;

use adapter::alert::TracingAlertSink;
use adapter::http::HttpClient;
use adapter::repository::access::AccessRepositoryImpl;
use adapter::repository::health::HealthRepositoryImpl;
use adapter::repository::log::LogRepositoryImpl;
use adapter::repository::notification::NotificationRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::alert::AlertSink;
use kernel::repository::access::AccessRepository;
use kernel::repository::health::HealthRepository;
use kernel::repository::log::LogRepository;
use kernel::repository::notification::NotificationRepository;
use kernel::repository::room::RoomRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;
use shared::error::AppResult;

#[derive(Clone)]
pub struct AppRegistry {
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
    access_repository: Arc<dyn AccessRepository>,
    log_repository: Arc<dyn LogRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    health_repository: Arc<dyn HealthRepository>,
    alert_sink: Arc<dyn AlertSink>,
}

impl AppRegistry {
    pub fn new(app_config: &AppConfig) -> AppResult<Self> {
        let client = HttpClient::new(&app_config.service)?;
        let room_repository = Arc::new(RoomRepositoryImpl::new(client.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(client.clone()));
        let access_repository = Arc::new(AccessRepositoryImpl::new(client.clone()));
        let log_repository = Arc::new(LogRepositoryImpl::new(client.clone()));
        let notification_repository = Arc::new(NotificationRepositoryImpl::new(client.clone()));
        let health_repository = Arc::new(HealthRepositoryImpl::new(client));
        Ok(Self {
            room_repository,
            user_repository,
            access_repository,
            log_repository,
            notification_repository,
            health_repository,
            alert_sink: Arc::new(TracingAlertSink),
        })
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn access_repository(&self) -> Arc<dyn AccessRepository> {
        self.access_repository.clone()
    }

    pub fn log_repository(&self) -> Arc<dyn LogRepository> {
        self.log_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }

    pub fn health_repository(&self) -> Arc<dyn HealthRepository> {
        self.health_repository.clone()
    }

    pub fn alert_sink(&self) -> Arc<dyn AlertSink> {
        self.alert_sink.clone()
    }
}
