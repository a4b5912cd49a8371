//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use school_dashboard_core::DashboardEvent;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{Modal, StudentListCursor};
use crate::model::{App, ContentPage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::HistoryBack;
    }
    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::HistoryForward;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::FOCUS_SWITCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 普通字母快捷键：正在输入文本时让给输入框
    if !app.is_typing() {
        if let Some(msg) = handle_shortcut_keys(key) {
            return msg;
        }
    }

    // 根据焦点位置处理按键
    if app.focus.is_sidebar() {
        handle_sidebar_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 外壳快捷键
fn handle_shortcut_keys(key: KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::TOGGLE_SIDEBAR.matches(&key) {
        AppMessage::Dashboard(DashboardEvent::MenuToggleClicked)
    } else if DefaultKeymap::SETTINGS.matches(&key) {
        AppMessage::Dashboard(DashboardEvent::SettingsClicked)
    } else if DefaultKeymap::THEME.matches(&key) {
        AppMessage::Dashboard(DashboardEvent::ThemeToggleClicked)
    } else if DefaultKeymap::FULLSCREEN.matches(&key) {
        AppMessage::Dashboard(DashboardEvent::FullscreenClicked)
    } else if DefaultKeymap::GOTO.matches(&key) {
        AppMessage::ShowGoTo
    } else if is_plain(&key) && key.code == KeyCode::Char('?') {
        AppMessage::ShowHelp
    } else {
        return None;
    };
    Some(msg)
}

/// 处理侧边栏的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 展开分组 / 打开链接
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.content_page() {
        ContentPage::Admission => handle_admission_keys(key, app),
        ContentPage::StudentList => handle_student_list_keys(key, app),
        ContentPage::Overview | ContentPage::Placeholder => AppMessage::Noop,
    }
}

/// 处理录取向导的按键
fn handle_admission_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 提交成功的弹窗只接受关闭
    if app.wizard_popup_open() {
        return match key.code {
            KeyCode::Enter => AppMessage::Dashboard(DashboardEvent::PopupCloseClicked),
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::WIZARD_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::WizardNext);
    }
    if DefaultKeymap::WIZARD_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::WizardPrev);
    }

    let on_checkbox = app
        .focused_control()
        .is_some_and(|control| control.is_checkbox());

    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::WizardNext),
        KeyCode::Char(' ') if on_checkbox => AppMessage::Content(ContentMessage::ToggleCheckbox),
        KeyCode::Char(c) if is_text_input(&key) && !on_checkbox => {
            AppMessage::Content(ContentMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 处理学生列表的按键
fn handle_student_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::RESET_FILTERS.matches(&key) {
        return AppMessage::Content(ContentMessage::ResetFilters);
    }

    let cursor = app.student_list.cursor();
    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::CyclePrev),
        KeyCode::Right => AppMessage::Content(ContentMessage::CycleNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => match cursor {
            StudentListCursor::Search => match key.code {
                KeyCode::Char(c) if is_text_input(&key) => {
                    AppMessage::Content(ContentMessage::Input(c))
                }
                KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
                _ => AppMessage::Noop,
            },
            StudentListCursor::Row(_) if DefaultKeymap::VIEW_PROFILE.matches(&key) => {
                AppMessage::Content(ContentMessage::ViewProfile)
            }
            _ => AppMessage::Noop,
        },
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match &app.modal.active {
        Some(Modal::GoTo { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c) if is_text_input(&key) => AppMessage::Modal(ModalMessage::Input(c)),
            _ => AppMessage::Noop,
        },
        Some(Modal::Error { .. }) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Some(Modal::Help) | None => AppMessage::Noop,
    }
}

fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 可以作为文本输入的按键（无修饰或仅 Shift）
fn is_text_input(key: &KeyEvent) -> bool {
    is_plain(key) && matches!(key.code, KeyCode::Char(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::ALT))
    }

    #[test]
    fn test_shortcuts_in_sidebar() {
        let app = test_app("home", "");

        assert!(matches!(
            handle_event(press(KeyCode::Char('t')), &app),
            AppMessage::Dashboard(DashboardEvent::ThemeToggleClicked)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('m')), &app),
            AppMessage::Dashboard(DashboardEvent::MenuToggleClicked)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }

    #[test]
    fn test_letters_are_text_while_typing() {
        let mut app = test_app("student-management", "");
        app.focus = FocusPanel::Content;

        assert!(matches!(
            handle_event(press(KeyCode::Char('t')), &app),
            AppMessage::Content(ContentMessage::Input('t'))
        ));
        assert!(matches!(
            handle_event(alt(KeyCode::Char('n')), &app),
            AppMessage::Content(ContentMessage::WizardNext)
        ));
        assert!(matches!(
            handle_event(alt(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn test_history_keys() {
        let app = test_app("student-management", "");

        assert!(matches!(
            handle_event(alt(KeyCode::Left), &app),
            AppMessage::HistoryBack
        ));
        assert!(matches!(
            handle_event(alt(KeyCode::Right), &app),
            AppMessage::HistoryForward
        ));
    }

    #[test]
    fn test_student_list_keys() {
        let mut app = test_app("student-management", "student-list");
        app.focus = FocusPanel::Content;

        assert!(matches!(
            handle_event(press(KeyCode::Char('v')), &app),
            AppMessage::Content(ContentMessage::Input('v'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::CycleNext)
        ));
        assert!(matches!(
            handle_event(alt(KeyCode::Char('r')), &app),
            AppMessage::Content(ContentMessage::ResetFilters)
        ));
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut app = test_app("home", "");
        app.modal.show_goto("");

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn test_resize_is_forwarded() {
        let app = test_app("home", "");
        assert!(matches!(
            handle_event(Event::Resize(90, 30), &app),
            AppMessage::Resize(90)
        ));
    }
}
