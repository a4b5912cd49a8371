//! 尚无内容的模块

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::layout::module_title;
use crate::view::theme::Styles;

/// 渲染占位内容
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", module_title(app)), Styles::title()),
        Line::from(""),
        Line::styled("  Nothing to show here yet.", Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(content), area);
}
