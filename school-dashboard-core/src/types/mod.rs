//! Type definition module

mod module;
mod student;
mod ui_state;
mod view;

pub use module::{AccordionId, ModuleId};
pub use student::{FilterCriteria, GradeLevel, StudentRecord};
pub use ui_state::{LayoutMode, Theme, UiState};
pub use view::{FieldKind, FormField, RowAction, TableBody, TableRow, ViewCommand};
