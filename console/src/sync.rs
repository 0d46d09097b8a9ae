use std::sync::Arc;

use kernel::{
    alert::{AlertLevel, AlertSink},
    model::id::RoomId,
    repository::{
        access::AccessRepository, log::LogRepository, room::RoomRepository, user::UserRepository,
    },
};
use shared::error::AppResult;

use crate::store::AccessStore;

const ROOM_LOG_LIMIT: usize = 20;

/// Keeps the [`AccessStore`] consistent with the remote service.
/// Every view of the data comes from here; no caller patches the
/// store directly.
pub struct SyncEngine {
    store: Arc<AccessStore>,
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
    access_repository: Arc<dyn AccessRepository>,
    log_repository: Arc<dyn LogRepository>,
    alert_sink: Arc<dyn AlertSink>,
}

impl SyncEngine {
    pub fn new(
        store: Arc<AccessStore>,
        room_repository: Arc<dyn RoomRepository>,
        user_repository: Arc<dyn UserRepository>,
        access_repository: Arc<dyn AccessRepository>,
        log_repository: Arc<dyn LogRepository>,
        alert_sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            store,
            room_repository,
            user_repository,
            access_repository,
            log_repository,
            alert_sink,
        }
    }

    pub fn store(&self) -> Arc<AccessStore> {
        self.store.clone()
    }

    /// Replaces the room and user catalogs wholesale, then re-selects
    /// the previously selected room (falling back to the first room
    /// when it no longer exists).
    ///
    /// Both fetches must succeed; on any failure the prior cache is
    /// left intact so the view never pairs rooms and users from
    /// different generations.
    pub async fn refresh_all(&self) -> AppResult<()> {
        let fetched = tokio::try_join!(
            self.room_repository.find_all(),
            self.user_repository.find_all(),
        );
        let (rooms, all_users) = match fetched {
            Ok(pair) => pair,
            Err(error) => {
                self.alert_sink
                    .alert(AlertLevel::Error, &format!("Error loading data: {error}"));
                return Err(error);
            }
        };

        let next_selection = self
            .store
            .selected_room_id()
            .filter(|id| rooms.iter().any(|room| &room.id == id))
            .or_else(|| rooms.first().map(|room| room.id.clone()));
        self.store.replace_catalog(rooms, all_users);

        if let Some(room_id) = next_selection {
            // 選択中ルームの詳細取得の失敗は select_room 側で処理済み
            if let Err(error) = self.select_room(&room_id).await {
                tracing::debug!(%room_id, %error, "re-selection after refresh failed");
            }
        } else {
            // No rooms left: a lingering selection would pair the new
            // catalog with another generation's grant list.
            self.store.clear_selection();
        }
        Ok(())
    }

    /// Selects a room and fetches its granted-user set and activity
    /// log. The most recently issued selection wins: a slower response
    /// belonging to a superseded selection is discarded at completion
    /// time with `AppError::StaleSelection`, which callers never
    /// surface to the user.
    ///
    /// On fetch failure the details are cleared to empty rather than
    /// left showing another room's data, and the error is surfaced.
    pub async fn select_room(&self, room_id: &RoomId) -> AppResult<()> {
        let token = self.store.begin_selection(room_id.clone());

        let fetched = tokio::try_join!(
            self.access_repository.find_granted(room_id),
            self.log_repository.find_by_room(room_id, ROOM_LOG_LIMIT),
        );
        match fetched {
            Ok((granted_users, room_log)) => {
                self.store.apply_selection(token, granted_users, room_log)?;
                tracing::debug!(%room_id, "room selected");
                Ok(())
            }
            Err(error) => {
                // A stale clear would hit the newer selection's slot.
                self.store.clear_selection_details(token)?;
                self.alert_sink.alert(
                    AlertLevel::Error,
                    &format!("Error loading room details: {error}"),
                );
                Err(error)
            }
        }
    }
}
