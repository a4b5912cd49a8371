//! 弹窗消息处理

use school_dashboard_core::{DashboardEvent, Location};

use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

use super::dispatch;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(modal) = app.modal.active.as_ref() else {
        return;
    };

    match modal {
        Modal::GoTo { .. } => handle_goto(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理地址栏弹窗
fn handle_goto(app: &mut App, msg: ModalMessage) {
    let Some(Modal::GoTo { ref mut input }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(c) => {
            input.push(c);
        }

        ModalMessage::Backspace => {
            input.pop();
        }

        ModalMessage::Confirm => {
            let fragment = input.trim().trim_start_matches('#').to_string();
            app.modal.close();
            if fragment.is_empty() {
                return;
            }
            // 与在浏览器地址栏中修改片段一样：先改地址，再通知
            app.services.location().push_fragment(&fragment);
            dispatch(app, DashboardEvent::LocationChanged(fragment));
        }
    }
}

/// 处理只需关闭的弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}
