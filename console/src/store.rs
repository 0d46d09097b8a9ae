use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::model::{id::RoomId, log::LogEntry, room::Room, user::User};
use shared::error::{AppError, AppResult};

pub type SelectionToken = u64;

#[derive(Debug, Default)]
struct Snapshot {
    rooms: Vec<Room>,
    all_users: Vec<User>,
    selected_room_id: Option<RoomId>,
    granted_users: Vec<User>,
    room_log: Vec<LogEntry>,
}

/// Session-scoped cache of the remote access state. Disposable: every
/// full refresh rebuilds the catalog wholesale, and selection details
/// are only ever written through a still-current selection token.
///
/// Locks are never held across await points; the selection epoch only
/// advances while the snapshot lock is held, so a token compare and
/// the write it guards are a single linearized step.
#[derive(Debug, Default)]
pub struct AccessStore {
    snapshot: RwLock<Snapshot>,
    selection_epoch: AtomicU64,
}

impl AccessStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.read().rooms.clone()
    }

    pub fn all_users(&self) -> Vec<User> {
        self.read().all_users.clone()
    }

    pub fn selected_room_id(&self) -> Option<RoomId> {
        self.read().selected_room_id.clone()
    }

    pub fn granted_users(&self) -> Vec<User> {
        self.read().granted_users.clone()
    }

    pub fn room_log(&self) -> Vec<LogEntry> {
        self.read().room_log.clone()
    }

    /// Users without access to the selected room, compared by
    /// canonical identifier rather than object identity. Together
    /// with `granted_users` this partitions `all_users`.
    pub fn available_users(&self) -> Vec<User> {
        let snapshot = self.read();
        let granted: HashSet<_> = snapshot
            .granted_users
            .iter()
            .filter_map(|user| user.access_identity().ok())
            .collect();
        snapshot
            .all_users
            .iter()
            .filter(|user| match user.access_identity() {
                Ok(identity) => !granted.contains(&identity),
                Err(_) => true,
            })
            .cloned()
            .collect()
    }

    pub fn replace_catalog(&self, rooms: Vec<Room>, all_users: Vec<User>) {
        let mut snapshot = self.write();
        snapshot.rooms = rooms;
        snapshot.all_users = all_users;
    }

    /// Starts a new selection, superseding any selection still in
    /// flight, and records the room id immediately so a failed fetch
    /// never shows another room's details under this room's header.
    pub fn begin_selection(&self, room_id: RoomId) -> SelectionToken {
        let mut snapshot = self.write();
        let token = self.selection_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        snapshot.selected_room_id = Some(room_id);
        token
    }

    /// Drops the selection entirely, bumping the epoch so any fetch
    /// still in flight lands stale.
    pub fn clear_selection(&self) {
        let mut snapshot = self.write();
        self.selection_epoch.fetch_add(1, Ordering::SeqCst);
        snapshot.selected_room_id = None;
        snapshot.granted_users = Vec::new();
        snapshot.room_log = Vec::new();
    }

    pub fn apply_selection(
        &self,
        token: SelectionToken,
        granted_users: Vec<User>,
        room_log: Vec<LogEntry>,
    ) -> AppResult<()> {
        let mut snapshot = self.write();
        if self.selection_epoch.load(Ordering::SeqCst) != token {
            return Err(AppError::StaleSelection);
        }
        snapshot.granted_users = granted_users;
        snapshot.room_log = room_log;
        Ok(())
    }

    pub fn clear_selection_details(&self, token: SelectionToken) -> AppResult<()> {
        self.apply_selection(token, Vec::new(), Vec::new())
    }
}
