//! Viewport and fullscreen capability

use crate::error::CoreResult;

/// Viewport size query
pub trait Viewport: Send + Sync {
    /// Current width in host units (CSS pixels, terminal columns, ...)
    fn width(&self) -> u32;
}

/// Fullscreen capability of the host
///
/// `request` and `exit` only start the transition. The outcome arrives later as
/// `DashboardEvent::FullscreenChanged`; callers must not assume the state flipped.
pub trait FullscreenControl: Send + Sync {
    /// Actual fullscreen state right now
    fn is_fullscreen(&self) -> bool;

    /// Ask the host to enter fullscreen
    fn request(&self) -> CoreResult<()>;

    /// Ask the host to leave fullscreen
    fn exit(&self) -> CoreResult<()>;
}
