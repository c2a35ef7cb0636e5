use thiserror::Error;

use crate::client::{config::ConfigError, navigation::RouteConfigError};

/// Errors that stop the console from starting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Malformed build-time configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The route registry is inconsistent; the router is never mounted.
    #[error(transparent)]
    RouteConfigErr(#[from] RouteConfigError),
}
