//! 录取向导
//!
//! ┌────────────────────────────────────────────────────┐
//! │ ✓ 1. Student Details ─ ● 2. Guardian ─ 3. ...     │  步骤指示
//! │                                                    │
//! │ ▶ Guardian Name *    Jane Doe▎                     │  当前步骤的控件
//! │   Guardian Phone *                                 │
//! │                                                    │
//! │ Please fill in: guardian-phone                     │  错误提示
//! │ [ Back ]  [ Next ]                                 │  按钮
//! └────────────────────────────────────────────────────┘

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use school_dashboard_core::types::FieldKind;
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::components::modal::centered_rect;
use crate::view::theme::{colors, Styles};

/// 标签列的显示宽度
const LABEL_WIDTH: usize = 24;

/// 渲染录取向导
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 步骤指示
            Constraint::Min(1),    // 控件
            Constraint::Length(2), // 错误提示
            Constraint::Length(1), // 按钮
        ])
        .split(area);

    render_indicators(app, frame, layout[0]);
    render_controls(app, frame, layout[1]);
    render_error(app, frame, layout[2]);
    render_buttons(app, frame, layout[3]);

    if app.wizard_popup_open() {
        render_popup(frame, area);
    }
}

/// 步骤指示：`active` 为当前步骤，`completed` 为已完成
fn render_indicators(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let store = app.services.store();

    let mut spans = vec![Span::raw(" ")];
    for (i, step) in app.services.config().wizard.steps.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", Styles::muted()));
        }
        let (mark, style) = if store.has_class(&step.indicator, "active") {
            (
                "● ",
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )
        } else if store.has_class(&step.indicator, "completed") {
            ("✓ ", Style::default().fg(c.success))
        } else {
            ("", Styles::muted())
        };
        spans.push(Span::styled(format!("{mark}{}. {}", i + 1, step.title), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 当前步骤的控件
fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_content();

    let mut lines = vec![Line::from("")];
    for (i, control) in app.admission_controls().iter().enumerate() {
        let is_current = focused && i == app.admission.focused;
        let prefix = if is_current { "▶ " } else { "  " };
        let label_style = if is_current {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let required = if control.required { " *" } else { "" };

        let line = match &control.value {
            FieldKind::Checkbox(checked) => Line::from(vec![
                Span::styled(prefix, label_style),
                Span::styled(if *checked { "[x] " } else { "[ ] " }, label_style),
                Span::styled(format!("{}{required}", control.label), label_style),
            ]),
            FieldKind::Text(value) => {
                let cursor = if is_current { "▎" } else { "" };
                Line::from(vec![
                    Span::styled(prefix, label_style),
                    Span::styled(
                        pad_to(&format!("{}{required}", control.label), LABEL_WIDTH),
                        label_style,
                    ),
                    Span::styled(format!("{value}{cursor}"), Style::default().fg(c.fg)),
                ])
            }
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 按显示宽度补齐空格（标签可能含全角字符）
fn pad_to(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// 校验失败时仪表盘写入的提示
fn render_error(app: &App, frame: &mut Frame, area: Rect) {
    let wizard = &app.services.config().wizard;
    let message = app
        .services
        .store()
        .text(&wizard.error_label)
        .unwrap_or_default();
    if message.is_empty() {
        return;
    }

    let paragraph = Paragraph::new(Line::styled(
        format!(" {message}"),
        Style::default().fg(colors().error),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let store = app.services.store();
    let wizard = &app.services.config().wizard;

    let prev_style = if store.is_disabled(&wizard.prev_button) {
        Styles::muted()
    } else {
        Style::default().fg(c.fg)
    };
    let next_label = store
        .text(&wizard.next_button)
        .unwrap_or_else(|| "Next".to_string());

    let line = Line::from(vec![
        Span::styled(" [ Back ]", prev_style),
        Span::raw("  "),
        Span::styled(
            format!("[ {next_label} ]"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 提交成功的弹窗
fn render_popup(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(44, 7, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Admission ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Admission submitted successfully!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press Enter or Esc to close", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, popup);
}
