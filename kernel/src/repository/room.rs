use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    room::{event::CreateRoom, Room},
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<Room>>;
    // 作成されたルームはサーバー側の応答をそのまま返す
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
}
