use derive_new::new;

use crate::model::id::BadgeUid;

/// Legacy combined creation endpoint; the service enrolls these as
/// badge users.
#[derive(Debug, new)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, new)]
pub struct CreateBadgeUser {
    pub uid: BadgeUid,
    pub name: String,
    pub active: bool,
    pub face_id: Option<String>,
}

#[derive(Debug, new)]
pub struct CreateFaceUser {
    pub username: String,
    pub name: String,
    pub class_ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct UpdateBadgeUser {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub face_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct UpdateFaceUser {
    pub name: Option<String>,
    pub class_ids: Option<Vec<String>>,
}
