//! 通用组件

pub mod modal;
pub mod settings;
pub mod sidebar;
pub mod statusbar;
