pub mod event;

use shared::error::{AppError, AppResult};

use crate::model::id::{BadgeUid, RecordId};

/// A user is either badge-based (RFID credential) or face-based
/// (biometric-match record). The two variants live in separate
/// identifier namespaces and are only ever addressed through
/// [`User::access_identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
    Badge(BadgeUser),
    Face(FaceUser),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeUser {
    pub record_id: Option<RecordId>,
    pub uid: Option<BadgeUid>,
    pub name: String,
    pub active: bool,
    pub face_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceUser {
    pub record_id: Option<RecordId>,
    pub username: String,
    pub name: String,
    pub class_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Badge,
    Face,
}

/// The canonical identifier used consistently for a user across
/// grant/revoke/check calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessIdentity {
    pub identifier: String,
    pub kind: UserKind,
}

impl User {
    pub fn name(&self) -> &str {
        match self {
            User::Badge(badge) => &badge.name,
            User::Face(face) => &face.name,
        }
    }

    pub fn kind(&self) -> UserKind {
        match self {
            User::Badge(_) => UserKind::Badge,
            User::Face(_) => UserKind::Face,
        }
    }

    /// Resolves the canonical access identifier for this user.
    ///
    /// Badge users are identified by uid. A badge record without a uid
    /// is a data inconsistency; it falls back to the record id and is
    /// logged rather than silently masked. Face users are identified
    /// by their record id only.
    pub fn access_identity(&self) -> AppResult<AccessIdentity> {
        match self {
            User::Badge(badge) => match (&badge.uid, &badge.record_id) {
                (Some(uid), _) => Ok(AccessIdentity {
                    identifier: uid.as_str().into(),
                    kind: UserKind::Badge,
                }),
                (None, Some(record_id)) => {
                    tracing::warn!(
                        user = %badge.name,
                        record_id = %record_id,
                        "badge user has no uid; falling back to record id"
                    );
                    Ok(AccessIdentity {
                        identifier: record_id.as_str().into(),
                        kind: UserKind::Badge,
                    })
                }
                (None, None) => Err(AppError::MalformedUserRecord(format!(
                    "badge user \"{}\" has neither uid nor record id",
                    badge.name
                ))),
            },
            User::Face(face) => match &face.record_id {
                Some(record_id) => Ok(AccessIdentity {
                    identifier: record_id.as_str().into(),
                    kind: UserKind::Face,
                }),
                None => Err(AppError::MalformedUserRecord(format!(
                    "face user \"{}\" has no record id",
                    face.name
                ))),
            },
        }
    }
}
