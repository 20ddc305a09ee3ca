pub mod config;
pub mod factory;
pub mod notification;
pub mod outbox;
pub mod registry;
