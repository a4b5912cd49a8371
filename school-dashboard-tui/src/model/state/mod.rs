//! 页面状态模块
//!
//! 定义各个内容面板的终端侧状态（焦点、输入中的文本）。
//! 面板本身的显示与数据由核心写入元素仓库，这里不重复保存。

mod admission;
mod modal;
mod student_list;

pub use admission::AdmissionState;
pub use modal::{Modal, ModalState};
pub use student_list::{academic_years, StudentListCursor, StudentListState};
