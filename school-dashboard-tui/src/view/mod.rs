//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model（以及元素仓库中的 class / 文本 / 表格），从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 侧边栏、状态栏、弹窗、设置面板
//!         mod layout;         // 主布局
//!         mod pages;          // 各模块的内容
//!         pub mod theme;      // 颜色方案
//!
//!
//!     ┌────────────────────────────────────────────────────┐
//!     │ ☰ School Dashboard │ Student Management            │  标题栏
//!     ├──────────┬─────────────────────────────────────────┤
//!     │ 侧边栏   │ ┌ Admission ─────────────────────────┐  │
//!     │          │ │                                    │  │  主内容区
//!     │ ▶ Students│ │        pages::admission           │  │
//!     │          │ └────────────────────────────────────┘  │
//!     ├──────────┴─────────────────────────────────────────┤
//!     │ Tab Switch Panels │ ↑↓ Select │ ...                │  状态栏
//!     └────────────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
