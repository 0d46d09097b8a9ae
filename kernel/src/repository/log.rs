use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::RoomId, log::LogEntry};

#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn find_by_room(&self, room_id: &RoomId, limit: usize) -> AppResult<Vec<LogEntry>>;
}
