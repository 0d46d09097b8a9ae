//! In-memory stand-ins for the remote access service and the alert
//! sink, with per-endpoint failure and delay switches for exercising
//! the engine's concurrency behavior.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use kernel::{
    alert::{AlertLevel, AlertSink},
    model::{
        id::{BadgeUid, RecordId, RoomId},
        log::{LogAction, LogEntry},
        notification::Notification,
        room::{event::CreateRoom, Room, RoomStatus},
        user::{
            event::{CreateBadgeUser, CreateFaceUser, CreateUser, UpdateBadgeUser, UpdateFaceUser},
            AccessIdentity, BadgeUser, FaceUser, User,
        },
    },
    repository::{
        access::AccessRepository, log::LogRepository, notification::NotificationRepository,
        room::RoomRepository, user::UserRepository,
    },
};
use shared::error::{AppError, AppResult};

use crate::{controller::AccessController, store::AccessStore, sync::SyncEngine};

pub(crate) fn room(id: &str, name: &str) -> Room {
    Room {
        id: id.into(),
        name: name.into(),
        location: "East Wing".into(),
        capacity: 10,
        status: RoomStatus::Available,
        granted_count: 0,
    }
}

pub(crate) fn badge_user(uid: &str, name: &str) -> User {
    User::Badge(BadgeUser {
        record_id: Some(RecordId::new(format!("rec-{uid}"))),
        uid: Some(uid.into()),
        name: name.into(),
        active: true,
        face_id: None,
    })
}

pub(crate) fn face_user(record_id: &str, name: &str) -> User {
    User::Face(FaceUser {
        record_id: Some(record_id.into()),
        username: format!("{}.face", name.to_lowercase()),
        name: name.into(),
        class_ids: Vec::new(),
    })
}

#[derive(Default)]
struct StubState {
    rooms: Vec<Room>,
    users: Vec<User>,
    grants: HashMap<RoomId, Vec<User>>,
    logs: HashMap<RoomId, Vec<LogEntry>>,
    latest_notification: Option<Notification>,
    room_seq: usize,
    user_seq: usize,
    log_seq: i64,
    create_room_calls: usize,
    create_user_calls: usize,
    granted_delays: HashMap<RoomId, Duration>,
    notification_delay: Option<Duration>,
    fail_users: Option<String>,
    fail_granted: Option<String>,
    fail_grant: Option<String>,
    fail_notification: Option<String>,
}

pub(crate) struct StubService {
    state: Mutex<StubState>,
}

impl StubService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(StubState::default()),
        })
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_room(&self, name: &str, location: &str, capacity: i32) -> Room {
        let mut state = self.lock();
        state.room_seq += 1;
        let room = Room {
            id: format!("room-{:03}", state.room_seq).into(),
            name: name.into(),
            location: location.into(),
            capacity,
            status: RoomStatus::Available,
            granted_count: 0,
        };
        state.rooms.push(room.clone());
        room
    }

    pub fn remove_room(&self, room_id: &RoomId) {
        let mut state = self.lock();
        state.rooms.retain(|room| &room.id != room_id);
        state.grants.remove(room_id);
        state.logs.remove(room_id);
    }

    pub fn add_badge_user(&self, uid: &str, name: &str) -> User {
        let user = badge_user(uid, name);
        self.lock().users.push(user.clone());
        user
    }

    pub fn add_face_user(&self, username: &str, name: &str) -> User {
        let mut state = self.lock();
        state.user_seq += 1;
        let user = User::Face(FaceUser {
            record_id: Some(RecordId::new(format!("rec-{:03}", state.user_seq))),
            username: username.into(),
            name: name.into(),
            class_ids: Vec::new(),
        });
        state.users.push(user.clone());
        user
    }

    /// Seeds a grant directly, bypassing the grant endpoint.
    pub fn push_grant(&self, room_id: &RoomId, user: &User) {
        self.lock()
            .grants
            .entry(room_id.clone())
            .or_default()
            .push(user.clone());
    }

    pub fn delay_granted(&self, room_id: &RoomId, delay: Duration) {
        self.lock().granted_delays.insert(room_id.clone(), delay);
    }

    pub fn delay_latest_notification(&self, delay: Duration) {
        self.lock().notification_delay = Some(delay);
    }

    pub fn set_latest_notification(&self, notification: Notification) {
        self.lock().latest_notification = Some(notification);
    }

    pub fn fail_users(&self, reason: &str) {
        self.lock().fail_users = Some(reason.into());
    }

    pub fn fail_granted(&self, reason: &str) {
        self.lock().fail_granted = Some(reason.into());
    }

    pub fn fail_grant(&self, reason: &str) {
        self.lock().fail_grant = Some(reason.into());
    }

    pub fn fail_latest_notification(&self, reason: &str) {
        self.lock().fail_notification = Some(reason.into());
    }

    pub fn clear_failures(&self) {
        let mut state = self.lock();
        state.fail_users = None;
        state.fail_granted = None;
        state.fail_grant = None;
        state.fail_notification = None;
    }

    pub fn create_room_calls(&self) -> usize {
        self.lock().create_room_calls
    }

    pub fn create_user_calls(&self) -> usize {
        self.lock().create_user_calls
    }

    fn find_user(state: &StubState, identity: &AccessIdentity) -> Option<User> {
        state
            .users
            .iter()
            .find(|user| user.access_identity().ok().as_ref() == Some(identity))
            .cloned()
    }

    fn log(state: &mut StubState, room_id: &RoomId, action: LogAction, subject: &str) {
        state.log_seq += 1;
        let entry = LogEntry {
            id: format!("log-{:03}", state.log_seq),
            timestamp: Utc::now(),
            action,
            subject: Some(subject.into()),
        };
        state.logs.entry(room_id.clone()).or_default().push(entry);
    }
}

#[async_trait]
impl RoomRepository for StubService {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let state = self.lock();
        Ok(state
            .rooms
            .iter()
            .map(|room| Room {
                granted_count: state.grants.get(&room.id).map_or(0, Vec::len),
                ..room.clone()
            })
            .collect())
    }

    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<Room>> {
        Ok(self
            .lock()
            .rooms
            .iter()
            .find(|room| &room.id == room_id)
            .cloned())
    }

    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut state = self.lock();
        state.create_room_calls += 1;
        state.room_seq += 1;
        let room = Room {
            id: format!("room-{:03}", state.room_seq).into(),
            name: event.name,
            location: event.location,
            capacity: event.capacity,
            status: RoomStatus::Available,
            granted_count: 0,
        };
        state.rooms.push(room.clone());
        Ok(room)
    }
}

#[async_trait]
impl UserRepository for StubService {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let state = self.lock();
        if let Some(reason) = &state.fail_users {
            return Err(AppError::ServiceRejected(reason.clone()));
        }
        Ok(state.users.clone())
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut state = self.lock();
        state.create_user_calls += 1;
        state.user_seq += 1;
        let user = User::Badge(BadgeUser {
            record_id: Some(RecordId::new(format!("rec-{:03}", state.user_seq))),
            uid: Some(BadgeUid::new(format!("uid-{:03}", state.user_seq))),
            name: event.name,
            active: true,
            face_id: None,
        });
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_badge_all(&self) -> AppResult<Vec<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|user| matches!(user, User::Badge(_)))
            .cloned()
            .collect())
    }

    async fn create_badge(&self, event: CreateBadgeUser) -> AppResult<User> {
        let mut state = self.lock();
        state.create_user_calls += 1;
        state.user_seq += 1;
        let user = User::Badge(BadgeUser {
            record_id: Some(RecordId::new(format!("rec-{:03}", state.user_seq))),
            uid: Some(event.uid),
            name: event.name,
            active: event.active,
            face_id: event.face_id,
        });
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_badge(&self, uid: &BadgeUid, event: UpdateBadgeUser) -> AppResult<User> {
        let mut state = self.lock();
        let badge = state
            .users
            .iter_mut()
            .find_map(|user| match user {
                User::Badge(badge) if badge.uid.as_ref() == Some(uid) => Some(badge),
                _ => None,
            })
            .ok_or_else(|| AppError::ServiceRejected("RFID user not found".into()))?;
        if let Some(name) = event.name {
            badge.name = name;
        }
        if let Some(active) = event.active {
            badge.active = active;
        }
        if let Some(face_id) = event.face_id {
            badge.face_id = Some(face_id);
        }
        Ok(User::Badge(badge.clone()))
    }

    async fn delete_badge(&self, uid: &BadgeUid) -> AppResult<()> {
        self.lock().users.retain(|user| {
            !matches!(user, User::Badge(badge) if badge.uid.as_ref() == Some(uid))
        });
        Ok(())
    }

    async fn find_face_all(&self) -> AppResult<Vec<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|user| matches!(user, User::Face(_)))
            .cloned()
            .collect())
    }

    async fn create_face(&self, event: CreateFaceUser) -> AppResult<User> {
        let mut state = self.lock();
        state.create_user_calls += 1;
        state.user_seq += 1;
        let user = User::Face(FaceUser {
            record_id: Some(RecordId::new(format!("rec-{:03}", state.user_seq))),
            username: event.username,
            name: event.name,
            class_ids: event.class_ids,
        });
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_face(&self, username: &str, event: UpdateFaceUser) -> AppResult<User> {
        let mut state = self.lock();
        let face = state
            .users
            .iter_mut()
            .find_map(|user| match user {
                User::Face(face) if face.username == username => Some(face),
                _ => None,
            })
            .ok_or_else(|| AppError::ServiceRejected("Face user not found".into()))?;
        if let Some(name) = event.name {
            face.name = name;
        }
        if let Some(class_ids) = event.class_ids {
            face.class_ids = class_ids;
        }
        Ok(User::Face(face.clone()))
    }

    async fn delete_face(&self, username: &str) -> AppResult<()> {
        self.lock()
            .users
            .retain(|user| !matches!(user, User::Face(face) if face.username == username));
        Ok(())
    }
}

#[async_trait]
impl AccessRepository for StubService {
    async fn grant(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()> {
        let mut state = self.lock();
        if let Some(reason) = &state.fail_grant {
            return Err(AppError::ServiceRejected(reason.clone()));
        }
        let user = Self::find_user(&state, identity)
            .ok_or_else(|| AppError::ServiceRejected("User not found".into()))?;
        let granted = state.grants.entry(room_id.clone()).or_default();
        let already = granted
            .iter()
            .any(|g| g.access_identity().ok().as_ref() == Some(identity));
        if already {
            // Granting an already-granted user is a service-side no-op.
            return Ok(());
        }
        granted.push(user.clone());
        Self::log(&mut state, room_id, LogAction::Grant, user.name());
        Ok(())
    }

    async fn revoke(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<()> {
        let mut state = self.lock();
        let granted = state.grants.entry(room_id.clone()).or_default();
        let before = granted.len();
        granted.retain(|g| g.access_identity().ok().as_ref() != Some(identity));
        if granted.len() == before {
            return Err(AppError::ServiceRejected(
                "User does not have access".into(),
            ));
        }
        let subject = identity.identifier.clone();
        Self::log(&mut state, room_id, LogAction::Revoke, &subject);
        Ok(())
    }

    async fn check(&self, room_id: &RoomId, identity: &AccessIdentity) -> AppResult<bool> {
        let state = self.lock();
        Ok(state.grants.get(room_id).is_some_and(|granted| {
            granted
                .iter()
                .any(|g| g.access_identity().ok().as_ref() == Some(identity))
        }))
    }

    async fn find_granted(&self, room_id: &RoomId) -> AppResult<Vec<User>> {
        let delay = self.lock().granted_delays.get(room_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let state = self.lock();
        if let Some(reason) = &state.fail_granted {
            return Err(AppError::ServiceRejected(reason.clone()));
        }
        Ok(state.grants.get(room_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl LogRepository for StubService {
    async fn find_by_room(&self, room_id: &RoomId, limit: usize) -> AppResult<Vec<LogEntry>> {
        let state = self.lock();
        let log = state.logs.get(room_id).cloned().unwrap_or_default();
        let skip = log.len().saturating_sub(limit);
        Ok(log.into_iter().skip(skip).collect())
    }
}

#[async_trait]
impl NotificationRepository for StubService {
    async fn find_latest(&self) -> AppResult<Option<Notification>> {
        let delay = self.lock().notification_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let state = self.lock();
        if let Some(reason) = &state.fail_notification {
            return Err(AppError::ServiceRejected(reason.clone()));
        }
        Ok(state.latest_notification.clone())
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    alerts: Mutex<Vec<(AlertLevel, String)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn last_message(&self) -> Option<String> {
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .map(|(_, message)| message.clone())
    }
}

impl AlertSink for RecordingSink {
    fn alert(&self, level: AlertLevel, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}

pub(crate) fn test_engine(service: &Arc<StubService>) -> (Arc<SyncEngine>, Arc<RecordingSink>) {
    let sink = RecordingSink::new();
    let engine = Arc::new(SyncEngine::new(
        Arc::new(AccessStore::new()),
        service.clone(),
        service.clone(),
        service.clone(),
        service.clone(),
        sink.clone(),
    ));
    (engine, sink)
}

pub(crate) fn test_controller(
    service: &Arc<StubService>,
) -> (AccessController, Arc<SyncEngine>, Arc<RecordingSink>) {
    let (engine, sink) = test_engine(service);
    let controller = AccessController::new(
        engine.clone(),
        service.clone(),
        service.clone(),
        service.clone(),
        sink.clone(),
    );
    (controller, engine, sink)
}
