pub mod event;

use serde::{Deserialize, Serialize};

use crate::model::id::RoomId;

/// A room as the remote service last reported it. The client never
/// edits a room in place; cached copies are only ever replaced
/// wholesale by a fresh server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub status: RoomStatus,
    /// Number of users currently granted access, derived server-side.
    pub granted_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}
