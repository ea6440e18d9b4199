//! Error types for espm-core

use thiserror::Error;

/// Result type alias using espm-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in espm-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Mobile Cards sync error
    #[error(transparent)]
    Sync(#[from] crate::sync::SyncError),
}
