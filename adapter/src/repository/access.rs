use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    user::{AccessIdentity, User},
};
use kernel::repository::access::AccessRepository;
use shared::error::AppResult;

use crate::http::{
    model::access::{
        AccessOutcome, CheckAccessRequest, CheckAccessResponse, GrantAccessRequest,
        RevokeAccessRequest, RoomAccessResponse,
    },
    HttpClient,
};

#[derive(new)]
pub struct AccessRepositoryImpl {
    client: HttpClient,
}

#[async_trait]
impl AccessRepository for AccessRepositoryImpl {
    async fn grant(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()> {
        let outcome: AccessOutcome = self
            .client
            .post("/access/grant", &GrantAccessRequest::new(room_id, identity))
            .await?;
        tracing::debug!(%room_id, identifier = %identity.identifier, message = ?outcome.message, "access granted");
        Ok(())
    }

    async fn revoke(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()> {
        let request = RevokeAccessRequest {
            room_id,
            user_identifier: &identity.identifier,
        };
        let outcome: AccessOutcome = self.client.post("/access/revoke", &request).await?;
        tracing::debug!(%room_id, identifier = %identity.identifier, message = ?outcome.message, "access revoked");
        Ok(())
    }

    async fn check(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<bool> {
        let request = CheckAccessRequest {
            room_id,
            user_identifier: &identity.identifier,
        };
        let res: CheckAccessResponse = self.client.post("/access/check", &request).await?;
        Ok(res.has_access)
    }

    async fn find_granted(&self, room_id: &RoomId) -> AppResult<Vec<User>> {
        let res: RoomAccessResponse = self.client.get(&format!("/rooms/{room_id}/access")).await?;
        Ok(res.into())
    }
}
