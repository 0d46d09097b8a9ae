use garde::Validate;
use kernel::model::{
    id::BadgeUid,
    room::event::CreateRoom,
    user::event::{CreateBadgeUser, CreateFaceUser, CreateUser},
};
use shared::error::{AppError, AppResult};

// The creation form has no owner selection; rooms belong to the
// seeded admin user.
const DEFAULT_OWNER_ID: &str = "1";

/// Raw room-creation input. Capacity arrives as entered text and is
/// parsed, not trusted; nothing is sent to the service until all
/// fields validate.
#[derive(Debug, Validate)]
pub struct RoomForm {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(length(min = 1))]
    pub capacity: String,
}

impl RoomForm {
    pub fn into_event(self) -> AppResult<CreateRoom> {
        self.validate()?;
        let capacity = self
            .capacity
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|capacity| *capacity > 0)
            .ok_or_else(|| {
                AppError::IncompleteInput("capacity must be a positive number".into())
            })?;
        Ok(CreateRoom {
            name: self.name,
            location: self.location,
            capacity,
            owner_id: DEFAULT_OWNER_ID.into(),
        })
    }
}

#[derive(Debug, Validate)]
pub struct UserForm {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub email: String,
}

impl UserForm {
    pub fn into_event(self) -> AppResult<CreateUser> {
        self.validate()?;
        Ok(CreateUser::new(self.name, self.email))
    }
}

#[derive(Debug, Validate)]
pub struct BadgeUserForm {
    #[garde(length(min = 1))]
    pub uid: String,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub active: bool,
    #[garde(skip)]
    pub face_id: Option<String>,
}

impl BadgeUserForm {
    pub fn into_event(self) -> AppResult<CreateBadgeUser> {
        self.validate()?;
        Ok(CreateBadgeUser::new(
            BadgeUid::new(self.uid),
            self.name,
            self.active,
            self.face_id,
        ))
    }
}

#[derive(Debug, Validate)]
pub struct FaceUserForm {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub class_ids: Vec<String>,
}

impl FaceUserForm {
    pub fn into_event(self) -> AppResult<CreateFaceUser> {
        self.validate()?;
        Ok(CreateFaceUser::new(self.username, self.name, self.class_ids))
    }
}
