//! 状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::StudentListCursor;
use crate::model::{App, ContentPage, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和模块生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Esc", "Close"));
        return hints;
    }

    // 全局快捷键
    hints.push(("Tab", "Switch Panels"));

    match app.focus {
        FocusPanel::Sidebar => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
            hints.push(("m", "Menu"));
            hints.push(("g", "Go To"));
        }
        FocusPanel::Content => match app.content_page() {
            ContentPage::Admission if app.wizard_popup_open() => {
                hints.push(("Enter", "Close"));
            }
            ContentPage::Admission => {
                hints.push(("↑↓", "Field"));
                hints.push(("Alt+n", "Next"));
                hints.push(("Alt+p", "Back"));
            }
            ContentPage::StudentList => {
                hints.push(("↑↓", "Select"));
                match app.student_list.cursor() {
                    StudentListCursor::Grade | StudentListCursor::Year => {
                        hints.push(("←→", "Change"));
                        hints.push(("Enter", "Apply"));
                    }
                    StudentListCursor::Search => {
                        hints.push(("Enter", "Apply"));
                    }
                    StudentListCursor::Row(_) => {
                        hints.push(("Enter/v", "View Profile"));
                    }
                }
                hints.push(("Alt+r", "Reset"));
            }
            ContentPage::Overview | ContentPage::Placeholder => {
                hints.push(("s", "Settings"));
                hints.push(("t", "Theme"));
            }
        },
    }

    let location = app.services.location();
    if location.can_go_back() {
        hints.push(("Alt+←", "Back"));
    }
    if location.can_go_forward() {
        hints.push(("Alt+→", "Forward"));
    }

    // Quit
    hints.push(("Alt+q", "Quit"));

    hints
}
