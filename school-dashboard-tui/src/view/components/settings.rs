//! 设置面板
//!
//! 停靠在内容区右上角，主题按钮的文字由仪表盘写入。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

const PANEL_WIDTH: u16 = 34;
const PANEL_HEIGHT: u16 = 8;

/// 渲染设置面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let store = app.services.store();
    let shell = &app.services.config().shell;

    let width = PANEL_WIDTH.min(area.width);
    let panel = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y,
        width,
        PANEL_HEIGHT.min(area.height),
    );
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Settings ")
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.bg).fg(c.fg));

    let theme_label = store.text(&shell.theme_button).unwrap_or_default();
    let fullscreen_label = if app.services.dashboard().state().fullscreen {
        "Exit Fullscreen"
    } else {
        "Enter Fullscreen"
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  t  ", Styles::hint_key()),
            Span::styled(theme_label, Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled("  f  ", Styles::hint_key()),
            Span::styled(fullscreen_label, Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::styled(
            "  s / Esc to close",
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
