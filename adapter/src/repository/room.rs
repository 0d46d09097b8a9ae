use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, Room},
};
use kernel::repository::room::RoomRepository;
use shared::error::AppResult;

use crate::http::{
    model::room::{CreateRoomRequest, RoomRow},
    HttpClient,
};

#[derive(new)]
pub struct RoomRepositoryImpl {
    client: HttpClient,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = self.client.get("/rooms").await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = self
            .client
            .get_optional(&format!("/rooms/{room_id}"))
            .await?;
        Ok(row.map(Room::from))
    }

    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let row: RoomRow = self
            .client
            .post("/rooms", &CreateRoomRequest::from(event))
            .await?;
        Ok(Room::from(row))
    }
}
