//! School Dashboard Core Library
//!
//! Provides the interaction state machines of the school administration dashboard:
//! - Shell controller (sidebar, settings panel, theme, fullscreen)
//! - Accordion group (mutually exclusive submenus)
//! - Module router (panel visibility, location fragment, active links)
//! - Step wizard (admission form with per-step validation)
//! - Filter engine (student list search and filters)
//!
//! This library owns no rendering logic. Every component issues commands against the
//! [`ViewSurface`] trait and reads its environment through the traits in [`traits`],
//! so a browser, a terminal or a recording fake can host it.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

// Re-export common types
pub use config::DashboardConfig;
pub use error::{CoreError, CoreResult};
pub use services::{Dashboard, DashboardContext, DashboardEvent};
pub use traits::{
    FullscreenControl, Location, ProfileViewer, StudentProvider, ViewSurface, Viewport,
};
