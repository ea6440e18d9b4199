use std::io;

use espm_core::sync::SyncError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] espm_core::Error),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to read supplier catalog {path}: {reason}")]
    Catalog { path: String, reason: String },
    #[error("Supplier not found in catalog: {0}")]
    UnknownSupplier(String),
}
