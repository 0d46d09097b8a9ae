use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::BadgeUid,
    user::{
        event::{CreateBadgeUser, CreateFaceUser, CreateUser, UpdateBadgeUser, UpdateFaceUser},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // 全ユーザー（バッジ・顔の両方）を取得する
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn create(&self, event: CreateUser) -> AppResult<User>;

    // バッジユーザーは uid で、顔ユーザーは username で操作する
    async fn find_badge_all(&self) -> AppResult<Vec<User>>;
    async fn create_badge(&self, event: CreateBadgeUser) -> AppResult<User>;
    async fn update_badge(&self, uid: &BadgeUid, event: UpdateBadgeUser) -> AppResult<User>;
    async fn delete_badge(&self, uid: &BadgeUid) -> AppResult<()>;

    async fn find_face_all(&self) -> AppResult<Vec<User>>;
    async fn create_face(&self, event: CreateFaceUser) -> AppResult<User>;
    async fn update_face(&self, username: &str, event: UpdateFaceUser) -> AppResult<User>;
    async fn delete_face(&self, username: &str) -> AppResult<()>;
}
