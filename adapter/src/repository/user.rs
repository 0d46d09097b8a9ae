use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::BadgeUid,
    user::{
        event::{CreateBadgeUser, CreateFaceUser, CreateUser, UpdateBadgeUser, UpdateFaceUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use serde_json::Value;
use shared::error::AppResult;

use crate::http::{
    model::user::{
        CreateBadgeUserRequest, CreateFaceUserRequest, CreateUserRequest, UpdateBadgeUserRequest,
        UpdateFaceUserRequest, UserRow,
    },
    HttpClient,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    client: HttpClient,
}

impl UserRepositoryImpl {
    async fn find_collection(&self, path: &str) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = self.client.get(path).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_collection("/users").await
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let row: UserRow = self
            .client
            .post("/users", &CreateUserRequest::from(event))
            .await?;
        Ok(User::from(row))
    }

    async fn find_badge_all(&self) -> AppResult<Vec<User>> {
        self.find_collection("/rfid-users").await
    }

    async fn create_badge(&self, event: CreateBadgeUser) -> AppResult<User> {
        let row: UserRow = self
            .client
            .post("/rfid-users", &CreateBadgeUserRequest::from(event))
            .await?;
        Ok(User::from(row))
    }

    async fn update_badge(&self, uid: &BadgeUid, event: UpdateBadgeUser) -> AppResult<User> {
        let row: UserRow = self
            .client
            .put(
                &format!("/rfid-users/{uid}"),
                &UpdateBadgeUserRequest::from(event),
            )
            .await?;
        Ok(User::from(row))
    }

    async fn delete_badge(&self, uid: &BadgeUid) -> AppResult<()> {
        let _: Value = self.client.delete(&format!("/rfid-users/{uid}")).await?;
        Ok(())
    }

    async fn find_face_all(&self) -> AppResult<Vec<User>> {
        self.find_collection("/face-users").await
    }

    async fn create_face(&self, event: CreateFaceUser) -> AppResult<User> {
        let row: UserRow = self
            .client
            .post("/face-users", &CreateFaceUserRequest::from(event))
            .await?;
        Ok(User::from(row))
    }

    async fn update_face(&self, username: &str, event: UpdateFaceUser) -> AppResult<User> {
        let row: UserRow = self
            .client
            .put(
                &format!("/face-users/{username}"),
                &UpdateFaceUserRequest::from(event),
            )
            .await?;
        Ok(User::from(row))
    }

    async fn delete_face(&self, username: &str) -> AppResult<()> {
        let _: Value = self.client.delete(&format!("/face-users/{username}")).await?;
        Ok(())
    }
}
