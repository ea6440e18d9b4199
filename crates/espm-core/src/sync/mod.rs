//! Mobile Cards synchronization: the card sync engine, its error type, and
//! the busy/toast feedback it reports through.

mod engine;
mod error;
mod feedback;

pub use engine::{deep_link, CardSyncEngine, SyncReport, SyncSettings, DEFAULT_STAGGER};
pub use error::{SyncError, SyncResult};
pub use feedback::{
    BusyIndicator, Notifier, DELETE_ALL_SUCCESS_MESSAGE, SYNC_SUCCESS_MESSAGE,
};
