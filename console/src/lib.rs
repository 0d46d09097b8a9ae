pub mod controller;
pub mod form;
pub mod poller;
pub mod store;
pub mod sync;

#[cfg(test)]
mod testing;
