//! 内容面板消息处理
//!
//! 录取向导：控件焦点、文本输入、复选框、上一步 / 下一步。
//! 学生列表：筛选栏输入、应用 / 重置筛选、查看档案。

use school_dashboard_core::DashboardEvent;

use crate::backend::DomStore;
use crate::message::ContentMessage;
use crate::model::state::StudentListCursor;
use crate::model::{App, ContentPage};

use super::dispatch;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.content_page() {
        ContentPage::Admission => update_admission(app, msg),
        ContentPage::StudentList => update_student_list(app, msg),
        ContentPage::Overview | ContentPage::Placeholder => {}
    }
}

// ========== 录取向导 ==========

fn update_admission(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            app.admission.previous_field();
        }
        ContentMessage::SelectNext => {
            let count = app.admission_controls().len();
            app.admission.next_field(count);
        }
        ContentMessage::Input(c) => {
            edit_focused(app, |store, section, index| store.input(section, index, c));
        }
        ContentMessage::Backspace => {
            edit_focused(app, |store, section, index| store.backspace(section, index));
        }
        ContentMessage::ToggleCheckbox => {
            edit_focused(app, |store, section, index| {
                store.toggle_checkbox(section, index)
            });
        }
        ContentMessage::WizardNext => {
            app.clear_status();
            dispatch(app, DashboardEvent::NextClicked);
        }
        ContentMessage::WizardPrev => {
            app.clear_status();
            dispatch(app, DashboardEvent::PrevClicked);
        }
        ContentMessage::CyclePrev
        | ContentMessage::CycleNext
        | ContentMessage::Confirm
        | ContentMessage::ResetFilters
        | ContentMessage::ViewProfile => {}
    }
}

/// 编辑当前步骤中获得焦点的控件
fn edit_focused(app: &mut App, edit: impl FnOnce(&DomStore, &str, usize) -> bool) {
    let Some(section) = app.admission_section().map(str::to_string) else {
        return;
    };
    let index = app.admission.focused;
    if !edit(app.services.store(), &section, index) {
        tracing::trace!(section = %section, index, "Edit did not apply to the focused control");
    }
}

// ========== 学生列表 ==========

fn update_student_list(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            app.student_list.move_up();
        }
        ContentMessage::SelectNext => {
            let rows = app.table_student_ids().len();
            app.student_list.move_down(rows);
        }
        ContentMessage::Input(c) => {
            if app.student_list.cursor() == StudentListCursor::Search {
                app.student_list.search.push(c);
            }
        }
        ContentMessage::Backspace => {
            if app.student_list.cursor() == StudentListCursor::Search {
                app.student_list.search.pop();
            }
        }
        ContentMessage::CyclePrev => {
            app.student_list.cycle(false);
        }
        ContentMessage::CycleNext => {
            app.student_list.cycle(true);
        }
        ContentMessage::Confirm => match app.student_list.cursor() {
            StudentListCursor::Row(_) => view_selected_profile(app),
            StudentListCursor::Search | StudentListCursor::Grade | StudentListCursor::Year => {
                let criteria = app.student_list.criteria();
                dispatch(app, DashboardEvent::FilterSubmitted(criteria));
            }
        },
        ContentMessage::ResetFilters => {
            app.student_list.reset();
            dispatch(app, DashboardEvent::FilterReset);
        }
        ContentMessage::ViewProfile => {
            view_selected_profile(app);
        }
        ContentMessage::ToggleCheckbox | ContentMessage::WizardNext | ContentMessage::WizardPrev => {}
    }
}

fn view_selected_profile(app: &mut App) {
    let StudentListCursor::Row(row) = app.student_list.cursor() else {
        return;
    };
    if let Some(id) = app.table_student_ids().into_iter().nth(row) {
        dispatch(app, DashboardEvent::ViewProfileClicked(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;
    use crate::model::FocusPanel;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, ContentMessage::Input(c));
        }
    }

    #[test]
    fn test_filled_step_advances() {
        let mut app = test_app("student-management", "");
        app.focus = FocusPanel::Content;

        type_text(&mut app, "Jane");
        update(&mut app, ContentMessage::SelectNext);
        type_text(&mut app, "Doe");
        update(&mut app, ContentMessage::SelectNext);
        type_text(&mut app, "2010-04-01");
        assert_eq!(app.admission.focused, 2);

        update(&mut app, ContentMessage::WizardNext);

        assert_eq!(
            app.services.dashboard().wizard().map(|w| w.current_step()),
            Some(1)
        );
        assert_eq!(app.admission.focused, 0);
        assert_eq!(app.admission_section(), Some("step-2"));
    }

    #[test]
    fn test_search_then_view_profile() {
        let mut app = test_app("student-management", "student-list");
        // 尚未筛选时表格只有提示文字
        assert!(app.table_student_ids().is_empty());

        update(&mut app, ContentMessage::Confirm);
        let total = app.table_student_ids().len();
        assert!(total > 1);

        type_text(&mut app, "S-10235");
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.table_student_ids(), vec!["S-10235".to_string()]);

        for _ in 0..3 {
            update(&mut app, ContentMessage::SelectNext);
        }
        assert_eq!(app.student_list.cursor(), StudentListCursor::Row(0));

        update(&mut app, ContentMessage::ViewProfile);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Opening profile for student S-10235.")
        );

        update(&mut app, ContentMessage::ResetFilters);
        assert!(app.table_student_ids().is_empty());
        assert_eq!(app.student_list.cursor(), StudentListCursor::Search);
    }
}
