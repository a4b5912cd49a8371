//! 侧边栏组件
//!
//! 行的展开状态来自子菜单的 `show` class，高亮来自链接 / 标题的 `active` class。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::{App, SidebarRow};
use crate::view::theme::{colors, Styles};

/// 渲染侧边栏
///
/// # Arguments
/// * `compact` - 侧边栏收成窄条时只显示每项的首字母
pub fn render(app: &App, frame: &mut Frame, area: Rect, compact: bool) {
    let c = colors();
    let is_focused = app.focus.is_sidebar();
    let store = app.services.store();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_for(is_focused));
    if !compact {
        block = block.title(" Menu ").title_style(Styles::title());
    }

    let rows = app.sidebar_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == app.sidebar.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let active = store.has_class(row.element_id(), "active");

            let content = if compact {
                let initial = row.label().chars().next().unwrap_or(' ');
                match row {
                    SidebarRow::Entry { .. } => format!("{prefix}{initial}"),
                    SidebarRow::Link { .. } => format!("{prefix}·"),
                }
            } else {
                match row {
                    SidebarRow::Entry {
                        label,
                        group: true,
                        expanded,
                        ..
                    } => format!("{prefix}{} {label}", if *expanded { "▾" } else { "▸" }),
                    SidebarRow::Entry { label, .. } => format!("{prefix}  {label}"),
                    SidebarRow::Link { label, .. } => format!("{prefix}    {label}"),
                }
            };

            let style = if is_selected {
                Styles::selected()
            } else if active {
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.sidebar.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
