//! Module and accordion identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical name of a content panel (`dashboard`, `admission`, `student-list`, ...)
///
/// Serialized as a bare string so it round-trips through the location fragment
/// and the JSON configuration unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a location fragment, tolerating a leading `#` and surrounding whitespace.
    ///
    /// Returns `None` for an empty fragment.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#').trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Element id of the panel that renders this module (`<id>-module`)
    #[must_use]
    pub fn default_panel_id(&self) -> String {
        format!("{}-module", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModuleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of an accordion group in the sidebar (`admin`, `student`, ...)
pub type AccordionId = String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fragment_strips_hash() {
        assert_eq!(
            ModuleId::from_fragment("#student-list"),
            Some(ModuleId::from("student-list"))
        );
        assert_eq!(ModuleId::from_fragment("  admission "), Some(ModuleId::from("admission")));
    }

    #[test]
    fn from_fragment_rejects_empty() {
        assert_eq!(ModuleId::from_fragment(""), None);
        assert_eq!(ModuleId::from_fragment("#"), None);
        assert_eq!(ModuleId::from_fragment("   "), None);
    }

    #[test]
    fn panel_id_follows_markup_convention() {
        assert_eq!(ModuleId::from("dashboard").default_panel_id(), "dashboard-module");
    }
}
