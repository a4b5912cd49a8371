//! Rendering surface abstract Trait

use crate::types::{FormField, ViewCommand};

/// Rendering layer the components issue commands against
///
/// Platform implementation:
/// - Terminal: `DomStore` (element store rendered by ratatui)
/// - Tests: `FakeView` (records every command)
pub trait ViewSurface: Send + Sync {
    /// Whether an element with this id exists on the current page
    ///
    /// # Arguments
    /// * `id` - Element id
    fn contains(&self, id: &str) -> bool;

    /// Apply one command. Commands addressed to absent elements are ignored.
    ///
    /// # Arguments
    /// * `command` - View command
    fn apply(&self, command: ViewCommand);

    /// Read back the form controls inside a section, in document order
    ///
    /// # Arguments
    /// * `section_id` - Element id of the enclosing section
    fn fields_in(&self, section_id: &str) -> Vec<FormField>;

    /// Apply a batch of commands in order
    fn apply_all(&self, commands: Vec<ViewCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}
