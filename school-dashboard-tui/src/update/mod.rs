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
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 消费 Message，修改 Model，或者把事件交给 Backend 层的仪表盘。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容面板消息（向导输入、筛选栏、表格）
//!         mod modal;          // 弹窗消息（地址栏、帮助、错误）
//!         mod navigation;     // 侧边栏消息
//!
//!         pub fn update(app, msg)         // 总入口
//!         pub(crate) fn dispatch(app, ev) // 把事件交给仪表盘并处理结果
//!
//!
//!     dispatch 是所有“会改变仪表盘”的消息的汇合点：
//!
//!         DashboardService::handle(event)
//!             │
//!             ├── Ok(Updated / Ignored)        → 无需额外处理
//!             ├── Ok(OpenPage { page, module }) → 打开另一个页面（重建文档与历史）
//!             ├── Ok(Submitted)                → 状态栏提示提交成功
//!             └── Err(e)                       → 写日志，并把错误显示在状态栏
//!
//!         之后再做几件收尾工作：
//!             · 取出“查看档案”产生的消息放到状态栏
//!             · 向导换了步骤时，控件焦点回到第一个
//!             · 侧边栏行数、表格行数变化时，收回选中位置
//!

mod content;
mod modal;
mod navigation;

use school_dashboard_core::services::DashboardOutcome;
use school_dashboard_core::types::ModuleId;
use school_dashboard_core::{DashboardEvent, Location};

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Dashboard(event) => {
            dispatch(app, event);
        }

        AppMessage::HistoryBack => match app.services.location().back() {
            Some(fragment) => dispatch(app, DashboardEvent::LocationChanged(fragment)),
            None => app.set_status("No earlier location"),
        },

        AppMessage::HistoryForward => match app.services.location().forward() {
            Some(fragment) => dispatch(app, DashboardEvent::LocationChanged(fragment)),
            None => app.set_status("No later location"),
        },

        AppMessage::GoBack => {
            // 从最上层开始关闭
            let state = app.services.dashboard().state();
            let (settings_open, overlay_visible) = (state.settings_open, state.overlay_visible);
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.wizard_popup_open() {
                dispatch(app, DashboardEvent::PopupCloseClicked);
            } else if settings_open {
                dispatch(app, DashboardEvent::SettingsCloseClicked);
            } else if overlay_visible {
                dispatch(app, DashboardEvent::OverlayClicked);
            } else {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ShowGoTo => {
            let current = app.services.location().fragment();
            app.modal.show_goto(&current);
        }

        AppMessage::Resize(columns) => {
            app.services.resize(columns);
        }

        AppMessage::Noop => {}
    }
}

/// 把事件交给仪表盘，并处理结果
pub(crate) fn dispatch(app: &mut App, event: DashboardEvent) {
    let step_before = current_step(app);

    match app.services.handle(event) {
        Ok(DashboardOutcome::OpenPage { page, module }) => open_page(app, &page, &module),
        Ok(DashboardOutcome::Submitted) => app.set_status("Admission submitted"),
        Ok(DashboardOutcome::Updated | DashboardOutcome::Ignored) => {}
        Err(e) => {
            if e.is_expected() {
                tracing::warn!(error = %e, "Dashboard event rejected");
            } else {
                tracing::error!(error = %e, "Dashboard event failed");
            }
            app.set_status(e.to_string());
        }
    }

    if let Some(message) = app.services.take_profile_message() {
        app.set_status(message);
    }

    if current_step(app) != step_before {
        app.admission.reset();
    }

    let rows = app.sidebar_rows().len();
    app.sidebar.clamp(rows);
    let table_rows = app.table_student_ids().len();
    app.student_list.clamp(table_rows);
}

fn current_step(app: &App) -> Option<usize> {
    app.services
        .dashboard()
        .wizard()
        .map(|wizard| wizard.current_step())
}

/// 打开另一个页面，页面内的输入状态随之清空
fn open_page(app: &mut App, page: &str, module: &ModuleId) {
    match app.services.open_page(page, module) {
        Ok(()) => {
            app.admission.reset();
            app.student_list.reset();
            let title = app
                .services
                .config()
                .page(page)
                .map(|host| host.title.clone())
                .unwrap_or_else(|_| page.to_string());
            app.set_status(format!("Opened {title}"));
        }
        Err(e) => {
            tracing::error!(page, error = %e, "Failed to open page");
            app.modal.show_error("Open page failed", &format!("{e:#}"));
        }
    }
}
