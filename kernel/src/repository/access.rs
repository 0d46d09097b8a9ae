use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::RoomId,
    user::{AccessIdentity, User},
};

/// Grant/revoke/check operations against the remote access service.
/// All writes are non-idempotent from the caller's perspective: they
/// are re-sent only on explicit user action, never automatically.
#[async_trait]
pub trait AccessRepository: Send + Sync {
    async fn grant(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()>;
    async fn revoke(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()>;
    async fn check(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<bool>;
    // ルームに現在アクセス権を持つユーザー一覧
    async fn find_granted(&self, room_id: &RoomId) -> AppResult<Vec<User>>;
}
