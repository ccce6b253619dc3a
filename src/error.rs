//! Error types for catalog operations.

use thiserror::Error;

/// Errors from configuration, authentication, and catalog REST calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Non-2xx response from the catalog. `reason` is the server-provided
    /// message when the body carries one, else the raw body.
    #[error("Catalog request failed ({status}): {reason}")]
    RequestFailed { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid S3 URI: {0}")]
    InvalidUri(String),
}

/// Errors from the path mirror walk.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Object path {path:?} does not start with root prefix {prefix:?}")]
    OutsideRoot { path: String, prefix: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}
