pub mod envelope;
pub mod stream;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod chat;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub use auth::{login, logout, register};

#[cfg(feature = "web")]
pub use chat::stream_chat;
