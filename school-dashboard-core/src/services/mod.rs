//! Dashboard components and their composition

mod accordion;
mod dashboard;
mod filter;
mod router;
mod shell;
mod wizard;

pub use accordion::{AccordionGroup, AccordionOutcome};
pub use dashboard::{Dashboard, DashboardEvent, DashboardOutcome};
pub use filter::{FilterEngine, FilterPresentation, NO_RESULTS_MESSAGE, PLACEHOLDER_MESSAGE};
pub use router::{LinkTarget, ModuleRouter, NavigateOutcome};
pub use shell::ShellController;
pub use wizard::{StepWizard, WizardTransition};

use std::sync::Arc;

use crate::traits::{
    FullscreenControl, Location, ProfileViewer, StudentProvider, ViewSurface, Viewport,
};

/// Host collaborators of one dashboard instance
///
/// The host creates this context and injects its own implementations.
#[derive(Clone)]
pub struct DashboardContext {
    /// Rendering layer
    pub view: Arc<dyn ViewSurface>,
    /// Addressable location (fragment + history)
    pub location: Arc<dyn Location>,
    pub viewport: Arc<dyn Viewport>,
    pub fullscreen: Arc<dyn FullscreenControl>,
    /// Student records for the list module
    pub students: Arc<dyn StudentProvider>,
    /// Target of the "view profile" row action
    pub profile_viewer: Arc<dyn ProfileViewer>,
}

impl DashboardContext {
    #[must_use]
    pub fn new(
        view: Arc<dyn ViewSurface>,
        location: Arc<dyn Location>,
        viewport: Arc<dyn Viewport>,
        fullscreen: Arc<dyn FullscreenControl>,
        students: Arc<dyn StudentProvider>,
        profile_viewer: Arc<dyn ProfileViewer>,
    ) -> Self {
        Self {
            view,
            location,
            viewport,
            fullscreen,
            students,
            profile_viewer,
        }
    }
}
