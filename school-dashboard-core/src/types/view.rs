//! View command vocabulary
//!
//! Components never touch a rendering layer directly. They emit these commands
//! against a [`ViewSurface`](crate::traits::ViewSurface), addressed by element id.

use serde::{Deserialize, Serialize};

/// One instruction for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ViewCommand {
    /// Show or hide an element
    SetVisible { id: String, visible: bool },
    /// Add (`on = true`) or remove a class
    SetClass { id: String, class: String, on: bool },
    /// Replace the text content
    SetText { id: String, text: String },
    /// Enable or disable a control
    SetDisabled { id: String, disabled: bool },
    /// Replace a table body
    SetTable { id: String, body: TableBody },
}

impl ViewCommand {
    pub fn visible(id: &str, visible: bool) -> Self {
        Self::SetVisible {
            id: id.to_string(),
            visible,
        }
    }

    pub fn class(id: &str, class: &str, on: bool) -> Self {
        Self::SetClass {
            id: id.to_string(),
            class: class.to_string(),
            on,
        }
    }

    pub fn text(id: &str, text: impl Into<String>) -> Self {
        Self::SetText {
            id: id.to_string(),
            text: text.into(),
        }
    }

    pub fn disabled(id: &str, disabled: bool) -> Self {
        Self::SetDisabled {
            id: id.to_string(),
            disabled,
        }
    }

    pub fn table(id: &str, body: TableBody) -> Self {
        Self::SetTable {
            id: id.to_string(),
            body,
        }
    }

    /// Element the command is addressed to
    pub fn target(&self) -> &str {
        match self {
            Self::SetVisible { id, .. }
            | Self::SetClass { id, .. }
            | Self::SetText { id, .. }
            | Self::SetDisabled { id, .. }
            | Self::SetTable { id, .. } => id,
        }
    }
}

/// Content of a table body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TableBody {
    /// A single full-width message row
    Message(String),
    /// Data rows
    Rows(Vec<TableRow>),
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub action: Option<RowAction>,
}

/// Per-row action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub label: String,
    /// Value passed back when the action fires (the student id)
    pub value: String,
}

/// Kind of a form control, as far as validation cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FieldKind {
    /// Text-like input, select or textarea
    Text(String),
    /// Checkbox
    Checkbox(bool),
}

/// A form control read back from the view surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(name: &str, required: bool, value: &str) -> Self {
        Self {
            name: name.to_string(),
            required,
            kind: FieldKind::Text(value.to_string()),
        }
    }

    pub fn checkbox(name: &str, required: bool, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            required,
            kind: FieldKind::Checkbox(checked),
        }
    }

    /// Required fields must be non-blank or checked; optional ones always pass
    pub fn is_satisfied(&self) -> bool {
        if !self.required {
            return true;
        }
        match &self.kind {
            FieldKind::Text(value) => !value.trim().is_empty(),
            FieldKind::Checkbox(checked) => *checked,
        }
    }
}
