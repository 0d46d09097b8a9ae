use kernel::model::{
    id::RoomId,
    user::{AccessIdentity, User},
};
use serde::{Deserialize, Serialize};

use super::user::{UserKindRep, UserRow};

#[derive(Debug, Serialize)]
pub struct GrantAccessRequest<'a> {
    pub room_id: &'a RoomId,
    pub user_identifier: &'a str,
    pub user_type: UserKindRep,
}

impl<'a> GrantAccessRequest<'a> {
    pub fn new(room_id: &'a RoomId, identity: &'a AccessIdentity) -> Self {
        Self {
            room_id,
            user_identifier: &identity.identifier,
            user_type: identity.kind.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RevokeAccessRequest<'a> {
    pub room_id: &'a RoomId,
    pub user_identifier: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CheckAccessRequest<'a> {
    pub room_id: &'a RoomId,
    pub user_identifier: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CheckAccessResponse {
    pub has_access: bool,
}

/// Body of a successful grant/revoke; only logged.
#[derive(Debug, Deserialize)]
pub struct AccessOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoomAccessResponse {
    #[serde(default)]
    pub users: Vec<UserRow>,
}

impl From<RoomAccessResponse> for Vec<User> {
    fn from(value: RoomAccessResponse) -> Self {
        value.users.into_iter().map(User::from).collect()
    }
}
