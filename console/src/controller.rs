use std::sync::Arc;

use kernel::{
    alert::{AlertLevel, AlertSink},
    model::{
        id::RoomId,
        room::Room,
        user::{
            event::{UpdateBadgeUser, UpdateFaceUser},
            AccessIdentity, BadgeUser, FaceUser, User,
        },
    },
    repository::{access::AccessRepository, room::RoomRepository, user::UserRepository},
};
use shared::error::{AppError, AppResult};

use crate::{
    form::{BadgeUserForm, FaceUserForm, RoomForm, UserForm},
    sync::SyncEngine,
};

/// Mutating operations of the management console. Every successful
/// mutation is followed by a re-fetch; the service alone decides
/// derived fields (counts, statuses), so no optimistic local state is
/// ever trusted as final.
pub struct AccessController {
    engine: Arc<SyncEngine>,
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
    access_repository: Arc<dyn AccessRepository>,
    alert_sink: Arc<dyn AlertSink>,
}

impl AccessController {
    pub fn new(
        engine: Arc<SyncEngine>,
        room_repository: Arc<dyn RoomRepository>,
        user_repository: Arc<dyn UserRepository>,
        access_repository: Arc<dyn AccessRepository>,
        alert_sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            engine,
            room_repository,
            user_repository,
            access_repository,
            alert_sink,
        }
    }

    pub async fn grant(&self, room: &Room, user: &User) -> AppResult<()> {
        let identity = self.resolve(user)?;
        if let Err(error) = self.access_repository.grant(&room.id, &identity).await {
            self.surface(&error);
            return Err(error);
        }
        self.alert_sink.alert(
            AlertLevel::Success,
            &format!("Access granted to {}", user.name()),
        );
        self.reconcile(&room.id).await;
        Ok(())
    }

    pub async fn revoke(&self, room: &Room, user: &User) -> AppResult<()> {
        let identity = self.resolve(user)?;
        if let Err(error) = self.access_repository.revoke(&room.id, &identity).await {
            self.surface(&error);
            return Err(error);
        }
        self.alert_sink.alert(
            AlertLevel::Success,
            &format!("Access revoked from {}", user.name()),
        );
        self.reconcile(&room.id).await;
        Ok(())
    }

    pub async fn has_access(&self, room: &Room, user: &User) -> AppResult<bool> {
        let identity = self.resolve(user)?;
        self.access_repository.check(&room.id, &identity).await
    }

    pub async fn create_room(&self, form: RoomForm) -> AppResult<Room> {
        let event = self.validated(form.into_event())?;
        match self.room_repository.create(event).await {
            Ok(room) => {
                self.alert_sink.alert(
                    AlertLevel::Success,
                    &format!("Room \"{}\" created successfully", room.name),
                );
                self.refresh_after_mutation().await;
                Ok(room)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    pub async fn create_user(&self, form: UserForm) -> AppResult<User> {
        let event = self.validated(form.into_event())?;
        match self.user_repository.create(event).await {
            Ok(user) => {
                self.alert_sink.alert(
                    AlertLevel::Success,
                    &format!("User \"{}\" created successfully", user.name()),
                );
                self.refresh_after_mutation().await;
                Ok(user)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    pub async fn enroll_badge_user(&self, form: BadgeUserForm) -> AppResult<User> {
        let event = self.validated(form.into_event())?;
        match self.user_repository.create_badge(event).await {
            Ok(user) => {
                self.alert_sink.alert(
                    AlertLevel::Success,
                    &format!("Badge user \"{}\" enrolled", user.name()),
                );
                self.refresh_after_mutation().await;
                Ok(user)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    pub async fn enroll_face_user(&self, form: FaceUserForm) -> AppResult<User> {
        let event = self.validated(form.into_event())?;
        match self.user_repository.create_face(event).await {
            Ok(user) => {
                self.alert_sink.alert(
                    AlertLevel::Success,
                    &format!("Face user \"{}\" enrolled", user.name()),
                );
                self.refresh_after_mutation().await;
                Ok(user)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    /// Removes a user from their variant's collection. Badge users
    /// are addressed by uid, face users by username.
    pub async fn remove_user(&self, user: &User) -> AppResult<()> {
        let removed = match user {
            User::Badge(BadgeUser { uid: Some(uid), .. }) => {
                self.user_repository.delete_badge(uid).await
            }
            User::Badge(badge) => Err(AppError::MalformedUserRecord(format!(
                "badge user \"{}\" has no uid to delete by",
                badge.name
            ))),
            User::Face(face) => self.user_repository.delete_face(&face.username).await,
        };
        if let Err(error) = removed {
            self.surface(&error);
            return Err(error);
        }
        self.alert_sink
            .alert(AlertLevel::Success, &format!("User \"{}\" removed", user.name()));
        self.refresh_after_mutation().await;
        Ok(())
    }

    pub async fn set_badge_active(&self, user: &BadgeUser, active: bool) -> AppResult<User> {
        let Some(uid) = &user.uid else {
            let error = AppError::MalformedUserRecord(format!(
                "badge user \"{}\" has no uid to update by",
                user.name
            ));
            self.surface(&error);
            return Err(error);
        };
        let event = UpdateBadgeUser {
            active: Some(active),
            ..Default::default()
        };
        match self.user_repository.update_badge(uid, event).await {
            Ok(updated) => {
                self.refresh_after_mutation().await;
                Ok(updated)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    pub async fn assign_face_classes(
        &self,
        user: &FaceUser,
        class_ids: Vec<String>,
    ) -> AppResult<User> {
        let event = UpdateFaceUser {
            class_ids: Some(class_ids),
            ..Default::default()
        };
        match self
            .user_repository
            .update_face(&user.username, event)
            .await
        {
            Ok(updated) => {
                self.refresh_after_mutation().await;
                Ok(updated)
            }
            Err(error) => {
                self.surface(&error);
                Err(error)
            }
        }
    }

    fn resolve(&self, user: &User) -> AppResult<AccessIdentity> {
        user.access_identity().inspect_err(|error| self.surface(error))
    }

    fn validated<T>(&self, result: AppResult<T>) -> AppResult<T> {
        result.inspect_err(|_| {
            self.alert_sink
                .alert(AlertLevel::Warning, "Please fill in all fields");
        })
    }

    fn surface(&self, error: &AppError) {
        self.alert_sink
            .alert(AlertLevel::Error, &format!("Error: {error}"));
    }

    /// The single reconciliation step after a grant or revoke:
    /// re-fetch the mutated room's details, then the full catalog, so
    /// derived counts come back from the service.
    async fn reconcile(&self, room_id: &RoomId) {
        if let Err(error) = self.engine.select_room(room_id).await {
            tracing::debug!(%room_id, %error, "post-mutation room re-sync failed");
        }
        self.refresh_after_mutation().await;
    }

    async fn refresh_after_mutation(&self) {
        if let Err(error) = self.engine.refresh_all().await {
            tracing::debug!(%error, "post-mutation refresh failed");
        }
    }
}
