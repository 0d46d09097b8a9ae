use kernel::model::{
    id::{BadgeUid, RecordId},
    user::{
        event::{CreateBadgeUser, CreateFaceUser, CreateUser, UpdateBadgeUser, UpdateFaceUser},
        BadgeUser, FaceUser, User, UserKind,
    },
};
use serde::{Deserialize, Serialize};

/// Wire name of the user variant: `rfid` for badge users, `face` for
/// face users. Untagged legacy records are badge users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKindRep {
    Rfid,
    Face,
}

impl From<UserKind> for UserKindRep {
    fn from(value: UserKind) -> Self {
        match value {
            UserKind::Badge => Self::Rfid,
            UserKind::Face => Self::Face,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[serde(rename = "_id", alias = "id", default)]
    pub record_id: Option<RecordId>,
    #[serde(rename = "type", default)]
    pub kind: Option<UserKindRep>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uid: Option<BadgeUid>,
    #[serde(default = "active_default")]
    pub active: bool,
    #[serde(default)]
    pub face_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub class_ids: Vec<String>,
}

fn active_default() -> bool {
    true
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            record_id,
            kind,
            name,
            uid,
            active,
            face_id,
            username,
            class_ids,
        } = value;
        match kind.unwrap_or(UserKindRep::Rfid) {
            UserKindRep::Face => User::Face(FaceUser {
                record_id,
                username: username.unwrap_or_default(),
                name,
                class_ids,
            }),
            UserKindRep::Rfid => User::Badge(BadgeUser {
                record_id,
                uid,
                name,
                active,
                face_id,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: &'static str,
}

impl From<CreateUser> for CreateUserRequest {
    fn from(value: CreateUser) -> Self {
        let CreateUser { name, email } = value;
        Self {
            name,
            email,
            role: "user",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBadgeUserRequest {
    pub uid: BadgeUid,
    pub name: String,
    pub active: bool,
    pub face_id: Option<String>,
}

impl From<CreateBadgeUser> for CreateBadgeUserRequest {
    fn from(value: CreateBadgeUser) -> Self {
        let CreateBadgeUser {
            uid,
            name,
            active,
            face_id,
        } = value;
        Self {
            uid,
            name,
            active,
            face_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaceUserRequest {
    pub username: String,
    pub name: String,
    pub class_ids: Vec<String>,
}

impl From<CreateFaceUser> for CreateFaceUserRequest {
    fn from(value: CreateFaceUser) -> Self {
        let CreateFaceUser {
            username,
            name,
            class_ids,
        } = value;
        Self {
            username,
            name,
            class_ids,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBadgeUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
}

impl From<UpdateBadgeUser> for UpdateBadgeUserRequest {
    fn from(value: UpdateBadgeUser) -> Self {
        let UpdateBadgeUser {
            name,
            active,
            face_id,
        } = value;
        Self {
            name,
            active,
            face_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaceUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_ids: Option<Vec<String>>,
}

impl From<UpdateFaceUser> for UpdateFaceUserRequest {
    fn from(value: UpdateFaceUser) -> Self {
        let UpdateFaceUser { name, class_ids } = value;
        Self { name, class_ids }
    }
}
