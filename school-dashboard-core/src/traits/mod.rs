//! Host abstraction trait definition

mod environment;
mod location;
mod profile_viewer;
mod student_provider;
mod view_surface;

pub use environment::{FullscreenControl, Viewport};
pub use location::Location;
pub use profile_viewer::{LogProfileViewer, ProfileViewer};
pub use student_provider::{InMemoryStudentProvider, StudentProvider};
pub use view_surface::ViewSurface;
