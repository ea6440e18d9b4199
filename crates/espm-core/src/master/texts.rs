//! Resource-bundle style text lookup for the master view.

use std::collections::HashMap;

pub const MASTER_TITLE_COUNT: &str = "masterTitleCount";
pub const MASTER_LIST_NO_DATA_TEXT: &str = "masterListNoDataText";
pub const MASTER_LIST_NO_DATA_WITH_FILTER_OR_SEARCH_TEXT: &str =
    "masterListNoDataWithFilterOrSearchText";
pub const MASTER_FILTER_BAR_TEXT: &str = "masterFilterBarText";
pub const WARNING: &str = "warning";
pub const WARNING_CONFIRM: &str = "warningConfirm";

/// Localized text lookup with positional `{0}`, `{1}`, ... placeholders.
pub trait TextBundle {
    fn text(&self, key: &str, args: &[String]) -> String;
}

/// Built-in English texts.
#[derive(Debug, Clone)]
pub struct DefaultTexts {
    entries: HashMap<&'static str, &'static str>,
}

impl Default for DefaultTexts {
    fn default() -> Self {
        Self {
            entries: HashMap::from([
                (MASTER_TITLE_COUNT, "Suppliers ({0})"),
                (MASTER_LIST_NO_DATA_TEXT, "No suppliers are currently available"),
                (
                    MASTER_LIST_NO_DATA_WITH_FILTER_OR_SEARCH_TEXT,
                    "No matching suppliers found",
                ),
                (MASTER_FILTER_BAR_TEXT, "Filtered by {0}"),
                (WARNING, "Warning"),
                (
                    WARNING_CONFIRM,
                    "Your entries will be lost when you leave this page.",
                ),
            ]),
        }
    }
}

impl TextBundle for DefaultTexts {
    fn text(&self, key: &str, args: &[String]) -> String {
        self.entries
            .get(key)
            .map_or_else(|| key.to_string(), |pattern| format_pattern(pattern, args))
    }
}

/// Replace `{n}` placeholders with the matching argument.
///
/// Placeholders without an argument are left as written.
pub fn format_pattern(pattern: &str, args: &[String]) -> String {
    let mut rendered = pattern.to_string();
    for (index, arg) in args.iter().enumerate() {
        rendered = rendered.replace(&format!("{{{index}}}"), arg);
    }
    rendered
}
