//! 侧边栏消息处理

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, SidebarRow};

use super::dispatch;

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let rows = app.sidebar_rows();

    match msg {
        NavigationMessage::SelectPrevious => {
            app.sidebar.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.sidebar.select_next(rows.len());
        }

        NavigationMessage::Confirm => {
            let Some(row) = rows.get(app.sidebar.selected) else {
                return;
            };
            app.clear_status();
            dispatch(app, row.event());

            // 打开链接后直接进入内容面板；分组标题只是展开 / 收起
            if matches!(row, SidebarRow::Link { .. }) {
                app.focus = FocusPanel::Content;
            }
        }

        NavigationMessage::SelectFirst => {
            app.sidebar.select_first();
        }

        NavigationMessage::SelectLast => {
            app.sidebar.select_last(rows.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;

    #[test]
    fn test_confirm_on_group_expands_it() {
        let mut app = test_app("student-management", "");
        assert_eq!(app.sidebar_rows().len(), 3);

        app.sidebar.selected = 2;
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.sidebar_rows().len(), 5);
        assert_eq!(app.focus, FocusPanel::Sidebar);

        // 再次确认收起，行数变回 3
        update(&mut app, NavigationMessage::SelectLast);
        assert_eq!(app.sidebar.selected, 4);
        app.sidebar.selected = 2;
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.sidebar_rows().len(), 3);
    }

    #[test]
    fn test_clamp_after_collapse() {
        let mut app = test_app("student-management", "");
        app.sidebar.selected = 2;
        update(&mut app, NavigationMessage::Confirm);
        update(&mut app, NavigationMessage::SelectLast);

        // 选中 fees 下的最后一个链接，然后从菜单按钮收起整个侧边栏
        crate::update::dispatch(
            &mut app,
            school_dashboard_core::DashboardEvent::MenuToggleClicked,
        );
        assert_eq!(app.sidebar_rows().len(), 3);
        assert_eq!(app.sidebar.selected, 2);
    }
}
