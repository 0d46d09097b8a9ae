use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, Room, RoomStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RoomRow {
    #[serde(alias = "_id")]
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default)]
    pub users_with_access: Vec<String>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            location,
            capacity,
            status,
            users_with_access,
        } = value;
        Room {
            id,
            name,
            location,
            capacity,
            status,
            granted_count: users_with_access.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub owner_id: String,
}

impl From<CreateRoom> for CreateRoomRequest {
    fn from(value: CreateRoom) -> Self {
        let CreateRoom {
            name,
            location,
            capacity,
            owner_id,
        } = value;
        Self {
            name,
            location,
            capacity,
            owner_id,
        }
    }
}
