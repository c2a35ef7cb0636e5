pub mod auth;
pub mod chat;
pub mod error;
pub mod sidebar;
