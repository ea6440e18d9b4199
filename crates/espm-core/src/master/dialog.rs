//! Declarative description of the Mobile Cards template dialog.

use crate::config::TEMPLATE_ID_MAX_LENGTH;

pub const TEMPLATE_DIALOG_ID: &str = "Dialog1";
pub const TEMPLATE_INPUT_ID: &str = "TemplateID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Save,
    Cancel,
}

impl DialogAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub id: &'static str,
    pub label: &'static str,
    pub max_length: usize,
}

/// What the presentation layer renders; it never reaches back into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescription {
    pub id: &'static str,
    pub title: &'static str,
    pub modal: bool,
    pub content_width: &'static str,
    pub fields: Vec<InputField>,
    pub actions: Vec<DialogAction>,
}

pub fn template_dialog() -> DialogDescription {
    DialogDescription {
        id: TEMPLATE_DIALOG_ID,
        title: "Dialog",
        modal: true,
        content_width: "1em",
        fields: vec![InputField {
            id: TEMPLATE_INPUT_ID,
            label: "Template ID",
            max_length: TEMPLATE_ID_MAX_LENGTH,
        }],
        actions: vec![DialogAction::Save, DialogAction::Cancel],
    }
}
