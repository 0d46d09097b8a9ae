use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::RoomId, log::LogEntry};
use kernel::repository::log::LogRepository;
use shared::error::AppResult;

use crate::http::{model::log::LogRow, HttpClient};

#[derive(new)]
pub struct LogRepositoryImpl {
    client: HttpClient,
}

#[async_trait]
impl LogRepository for LogRepositoryImpl {
    async fn find_by_room(&self, room_id: &RoomId, limit: usize) -> AppResult<Vec<LogEntry>> {
        let rows: Vec<LogRow> = self
            .client
            .get(&format!("/logs/room/{room_id}?limit={limit}"))
            .await?;
        // サーバーの並び順をそのまま保持する
        Ok(rows.into_iter().map(LogEntry::from).collect())
    }
}
