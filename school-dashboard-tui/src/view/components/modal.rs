//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::state::Modal;
use crate::model::App;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::GoTo { input } => render_goto(frame, input),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距后的区域
fn inner(area: Rect, dx: u16, dy: u16) -> Rect {
    Rect::new(
        area.x + dx,
        area.y + dy,
        area.width.saturating_sub(dx * 2),
        area.height.saturating_sub(dy * 2),
    )
}

/// 渲染地址栏弹窗
fn render_goto(frame: &mut Frame, input: &str) {
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Go To ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::styled("Module", Style::default().fg(Color::Gray)),
        Line::from(vec![
            Span::styled("  #", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{input}▎"), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::styled(
            "Enter to go, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area, 2, 1));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            "Press Esc or Enter to close",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner(area, 2, 2));
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn help_heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(58, 26, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        help_heading("Global shortcuts"),
        help_line("Tab", "Switch panel"),
        help_line("↑↓/jk", "Move Up/Down"),
        help_line("Enter", "Confirm"),
        help_line("Esc", "Close panel / drawer / popup"),
        help_line("Alt+←→", "History back / forward"),
        help_line("Alt+q", "Quit"),
        Line::from(""),
        help_heading("Shell (outside text fields)"),
        help_line("m", "Toggle sidebar"),
        help_line("s", "Settings"),
        help_line("t", "Switch theme"),
        help_line("f", "Fullscreen"),
        help_line("g", "Go to module"),
        Line::from(""),
        help_heading("Admission"),
        help_line("Alt+n", "Next / Submit"),
        help_line("Alt+p", "Previous step"),
        help_line("Space", "Toggle checkbox"),
        Line::from(""),
        help_heading("Student list"),
        help_line("←→", "Change grade / year"),
        help_line("Alt+r", "Reset filters"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area, 2, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 40, 10);

        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 40, 10));
    }
}
