//! Busy and toast feedback reported around Mobile Cards calls.

use super::SyncError;

pub const SYNC_SUCCESS_MESSAGE: &str = "Successful sync with Mobile Cards";
pub const DELETE_ALL_SUCCESS_MESSAGE: &str = "Successful Delete of all Mobile Cards";

/// Transient user-facing notifications (toasts).
pub trait Notifier {
    fn show_toast(&self, message: &str);
}

/// Owner of the busy flag shown while a Mobile Cards call is running.
pub trait BusyIndicator {
    fn set_busy(&mut self, busy: bool);
}

pub(crate) fn sync_failure_message(error: &SyncError) -> String {
    format!("Unable to sync with Mobile Cards: status {error}")
}

pub(crate) fn delete_all_failure_message(error: &SyncError) -> String {
    match error {
        SyncError::Status { status, .. } => {
            format!("Delete All cards failed with status: {status}")
        }
        other => format!("Delete All cards failed: {other}"),
    }
}
