pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod error;
pub mod model;
pub mod navigation;
pub mod route;
pub mod router;
pub mod session;

pub use app::App;
