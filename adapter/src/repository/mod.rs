pub mod access;
pub mod health;
pub mod log;
pub mod notification;
pub mod room;
pub mod user;
