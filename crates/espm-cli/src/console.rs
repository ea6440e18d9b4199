//! Terminal stand-ins for the page services the master coordinator expects.

use espm_core::master::{MasterHost, Target};
use espm_core::sync::Notifier;
use tracing::debug;

/// Prints toasts on stderr so stdout carries only command output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_toast(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Host without navigation; the terminal has no detail page or history.
#[derive(Debug, Default)]
pub struct HeadlessHost;

impl MasterHost for HeadlessHost {
    fn nav_to_object(&mut self, supplier_id: &str, replace: bool) {
        debug!(supplier_id, replace, "Detail navigation");
    }

    fn display_target(&mut self, target: Target) {
        debug!(?target, "Display target");
    }

    fn has_previous_history(&self) -> bool {
        false
    }

    fn history_back(&mut self) {}

    fn navigate_external(&mut self, shell_hash: &str) {
        debug!(shell_hash, "External navigation");
    }

    fn confirm(&mut self, _title: &str, _question: &str) -> bool {
        false
    }

    fn has_pending_changes(&self) -> bool {
        false
    }

    fn reset_changes(&mut self) {}

    fn is_phone(&self) -> bool {
        false
    }
}
