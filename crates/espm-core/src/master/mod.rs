//! Supplier master list: bound list state, view models, texts, and the
//! coordinator reacting to page events.

mod controller;
mod dialog;
mod list;
mod texts;
mod view_model;

pub use controller::{path_with_slash, MasterController, MasterHost, Target, LAUNCHPAD_HOME};
pub use dialog::{
    template_dialog, DialogAction, DialogDescription, InputField, TEMPLATE_DIALOG_ID,
    TEMPLATE_INPUT_ID,
};
pub use list::{ListFilter, ListLoadOutcome, ListMode, SortKey, Sorter, SupplierList};
pub use texts::{format_pattern, DefaultTexts, TextBundle};
pub use view_model::{AppViewModel, MasterViewModel};
