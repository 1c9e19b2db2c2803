mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use crate::session::SessionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardcoreError {
    #[error("no active session with id {0}")]
    InvalidSession(SessionId),

    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("registry index not found at {0}")]
    RegistryNotFound(String),

    #[error("invalid registry index: {0}")]
    InvalidRegistry(String),

    #[error("Configuration file error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardcoreError>;
