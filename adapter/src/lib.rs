pub mod alert;
pub mod http;
pub mod repository;
