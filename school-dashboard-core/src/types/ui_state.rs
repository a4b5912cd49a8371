//! Shell state definition

use serde::{Deserialize, Serialize};

use super::{AccordionId, ModuleId};

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class put on the root element (`light-theme` / `dark-theme`)
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Label of the theme button, which offers the opposite theme
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark",
            Self::Dark => "Switch to Light",
        }
    }
}

/// Layout behaviour picked from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Sidebar is an overlay drawer
    Mobile,
    /// Sidebar collapses in place
    #[default]
    Desktop,
}

impl LayoutMode {
    /// Narrow when the width does not exceed the breakpoint
    #[must_use]
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Process-wide UI state of one dashboard instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub sidebar_open: bool,
    pub settings_open: bool,
    pub theme: Theme,
    /// Actual fullscreen state as last reported by the host
    pub fullscreen: bool,
    pub active_module: Option<ModuleId>,
    pub open_accordion: Option<AccordionId>,
    /// Mobile drawer overlay
    pub overlay_visible: bool,
    /// Layout used by the last sidebar decision
    pub layout: LayoutMode,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            settings_open: false,
            theme: Theme::default(),
            fullscreen: false,
            active_module: None,
            open_accordion: None,
            overlay_visible: false,
            layout: LayoutMode::default(),
        }
    }
}

impl UiState {
    /// Create state with the given starting theme
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Whether the sidebar is currently collapsed on a wide layout
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        !self.sidebar_open && !self.layout.is_mobile()
    }
}
