pub mod id;
pub mod log;
pub mod notification;
pub mod room;
pub mod user;
