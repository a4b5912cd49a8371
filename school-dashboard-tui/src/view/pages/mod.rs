//! 各模块的内容

pub mod admission;
pub mod overview;
pub mod placeholder;
pub mod student_list;
