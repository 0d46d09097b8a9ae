use async_trait::async_trait;
use derive_new::new;
use kernel::model::notification::Notification;
use kernel::repository::notification::NotificationRepository;
use shared::error::AppResult;

use crate::http::{model::notification::NotificationRow, HttpClient};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    client: HttpClient,
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn find_latest(&self) -> AppResult<Option<Notification>> {
        let row: Option<NotificationRow> = self.client.get_optional("/notifications/latest").await?;
        Ok(row.map(Notification::from))
    }
}
