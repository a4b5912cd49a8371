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
//!
//! src/backend/mod.rs
//! Backend 层：宿主适配
//!
//! Backend 层与 UI 解耦，为 school-dashboard-core 提供它需要的全部宿主能力。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod dashboard_service;      // 服务入口，持有 Dashboard
//!         mod dom_store;              // 元素仓库（ViewSurface）
//!         mod history_location;       // 地址与历史（Location）
//!         mod environment;            // 视口与全屏（Viewport / FullscreenControl）
//!         mod profile_viewer;         // 查看档案（ProfileViewer）
//!         mod config_service;         // 配置文件（JSON）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、仪表盘服务（DashboardService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/dashboard_service.rs 中定义：
//!
//!         创建流程：
//!             1. 按配置为当前页面构建 DomStore
//!             2. 用初始片段创建 HistoryLocation
//!             3. 组装 DashboardContext（视口、全屏、学生数据、档案）
//!             4. Dashboard::new() 之后立即 start()
//!
//!         DashboardOutcome::OpenPage 时调用 open_page()，
//!         相当于浏览器加载另一个页面：1 ~ 4 全部重做。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、元素仓库（DomStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/dom_store.rs 中定义：
//!
//!         核心组件只会对元素 id 发出 ViewCommand：
//!             - SetVisible    显示 / 隐藏
//!             - SetClass      增删 class（show、active、collapsed……）
//!             - SetText       改写文本
//!             - SetDisabled   禁用按钮
//!             - SetTable      替换表格内容
//!
//!         View 层不关心是谁发出的命令，只从 DomStore 读取状态来渲染。
//!         不存在的元素上的命令被静默忽略，与浏览器中查不到元素时一致。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、全屏
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/environment.rs 中定义：
//!
//!         请求 ──▶ channel ──▶ 主循环下一轮 drain_fullscreen_changes()
//!                                   ──▶ DashboardEvent::FullscreenChanged
//!
//!         核心不会假设请求立即生效，状态只跟随通知变化。
//!

mod config_service;
mod dashboard_service;
mod dom_store;
mod environment;
mod history_location;
mod profile_viewer;

pub use config_service::{ConfigService, JsonConfigService, TuiConfig};
pub use dashboard_service::{load_students, DashboardService};
pub use dom_store::{DomStore, FormControl};
pub use environment::{TerminalFullscreen, TerminalViewport};
pub use history_location::HistoryLocation;
pub use profile_viewer::StatusProfileViewer;
