//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 事件分发          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ school-dashboard- │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 这里只保存“终端才有”的状态：焦点、侧边栏光标、输入中的筛选条件、弹窗。
//! 侧边栏开合、主题、当前模块、向导步骤等都属于核心的 UiState，
//! 由 backend::DashboardService 持有，Model 不做第二份拷贝。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Sidebar / Content）
//!         mod page;           // 模块 → 页面组件
//!         mod sidebar;        // 侧边栏行与选中状态
//!
//!         pub mod state;      // 各面板的输入状态与弹窗
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit: bool,                  // 决定应用是否应该退出
//!         focus: FocusPanel,                  // 当前焦点在哪个面板
//!         sidebar: SidebarState,              // 侧边栏选中行
//!         status_message: Option<String>,     // 状态栏消息
//!         admission: AdmissionState,          // 向导中获得焦点的控件
//!         student_list: StudentListState,     // 筛选栏输入、表格选中行
//!         modal: ModalState,                  // 弹窗
//!         services: DashboardService,         // 核心与宿主适配器
//!     }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、侧边栏行（SidebarRow）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     行不是固定列表，每次从菜单配置和元素仓库计算：
//!
//!         Dashboard                   ← Entry
//!         Students ▾                  ← Entry (group, expanded)
//!             Add Student             ← Link（子菜单展开时才出现）
//!             View Students           ← Link
//!         Fees ▸                      ← Entry (group)
//!

mod app;
mod focus;
mod page;
mod sidebar;

pub mod state;

pub use app::App;
#[cfg(test)]
pub(crate) use app::test_support;
pub use focus::FocusPanel;
pub use page::ContentPage;
pub use sidebar::{SidebarRow, SidebarState};
