//! Addressable location abstract Trait

/// The addressable location (URL fragment) of the host
///
/// Writes must not reload anything. The host reports fragment changes made
/// outside the router (address bar edits, back/forward) by dispatching
/// `DashboardEvent::LocationChanged`.
pub trait Location: Send + Sync {
    /// Current fragment, without the leading `#`
    fn fragment(&self) -> String;

    /// Add a history entry for `fragment`
    fn push_fragment(&self, fragment: &str);

    /// Overwrite the current history entry with `fragment`
    fn replace_fragment(&self, fragment: &str);
}
