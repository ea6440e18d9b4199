//! View state of the master page and the app-wide flags it shares.

use super::list::SortKey;
use crate::sync::BusyIndicator;

/// State the master view renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterViewModel {
    pub is_filter_bar_visible: bool,
    pub filter_bar_label: String,
    /// Busy indicator delay of the list, zero until the first update finished.
    pub delay: u32,
    pub title: String,
    pub no_data_text: String,
    pub sort_by: SortKey,
    pub busy: bool,
}

impl MasterViewModel {
    pub fn new(title: String, no_data_text: String) -> Self {
        Self {
            is_filter_bar_visible: false,
            filter_bar_label: String::new(),
            delay: 0,
            title,
            no_data_text,
            sort_by: SortKey::default(),
            busy: false,
        }
    }
}

impl BusyIndicator for MasterViewModel {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

/// App-level flags shared between master and detail pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub add_enabled: bool,
    /// Binding path the list should select once it finishes updating.
    pub item_to_select: Option<String>,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            add_enabled: true,
            item_to_select: None,
        }
    }
}
