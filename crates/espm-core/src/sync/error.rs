//! Error type shared by the registration client and the sync engine.

use thiserror::Error;

use crate::cards::RegistrationMethod;

/// Failure of a Mobile Cards call or of a whole sync pass.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Invalid Mobile Cards configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Mobile Cards HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {method}: {body}")]
    Status {
        method: RegistrationMethod,
        status: u16,
        body: String,
    },
    #[error("Invalid Mobile Cards payload: {0}")]
    InvalidPayload(String),
}

impl SyncError {
    /// HTTP status of the failed call, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::InvalidConfiguration(_) | Self::InvalidPayload(_) => None,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
