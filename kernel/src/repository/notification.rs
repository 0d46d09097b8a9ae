use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::notification::Notification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    // 最新の通知（無ければ None）
    async fn find_latest(&self) -> AppResult<Option<Notification>>;
}
