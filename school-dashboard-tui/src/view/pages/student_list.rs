//! 学生列表
//!
//! 上方是筛选栏（搜索、年级、学年），下方是仪表盘写入的表格内容：
//! 尚未筛选或没有结果时是一行提示文字，否则是数据行。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use school_dashboard_core::types::TableBody;

use crate::model::state::StudentListCursor;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const HEADERS: [&str; 6] = ["ID", "Name", "Grade", "Academic Year", "Guardian", ""];

/// 渲染学生列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 筛选栏
            Constraint::Min(1),    // 表格
        ])
        .split(area);

    render_filters(app, frame, layout[0]);
    render_table(app, frame, layout[1]);
}

fn render_filters(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = &app.student_list;
    let cursor = if app.focus.is_content() {
        Some(state.cursor())
    } else {
        None
    };

    let field_style = |at: StudentListCursor| {
        if cursor == Some(at) {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        }
    };
    let arrows = |at: StudentListCursor, text: &str| {
        if cursor == Some(at) {
            format!("◀ {text} ▶")
        } else {
            format!("  {text}  ")
        }
    };

    let search_cursor = if cursor == Some(StudentListCursor::Search) {
        "▎"
    } else {
        ""
    };
    let grade = state.grade_level().map_or("All Grades", |g| g.label());
    let year = state.academic_year().unwrap_or("All Years");

    let line = Line::from(vec![
        Span::styled("Search: ", Styles::muted()),
        Span::styled(
            format!("{}{search_cursor}", state.search),
            field_style(StudentListCursor::Search),
        ),
        Span::raw("   "),
        Span::styled("Grade: ", Styles::muted()),
        Span::styled(
            arrows(StudentListCursor::Grade, grade),
            field_style(StudentListCursor::Grade),
        ),
        Span::raw("   "),
        Span::styled("Year: ", Styles::muted()),
        Span::styled(
            arrows(StudentListCursor::Year, year),
            field_style(StudentListCursor::Year),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let table_id = &app.services.config().student_list.table;

    let rows = match app.services.store().table(table_id) {
        Some(TableBody::Rows(rows)) => rows,
        Some(TableBody::Message(message)) => {
            render_message(frame, area, &message);
            return;
        }
        None => return,
    };

    let header = Row::new(HEADERS).style(Styles::title()).bottom_margin(1);
    let body: Vec<Row> = rows
        .into_iter()
        .map(|row| {
            let mut cells = row.cells;
            cells.push(row.action.map(|a| format!("[{}]", a.label)).unwrap_or_default());
            Row::new(cells).style(Style::default().fg(c.fg))
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Min(14),
        Constraint::Length(15),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    if let (true, StudentListCursor::Row(row)) =
        (app.focus.is_content(), app.student_list.cursor())
    {
        state.select(Some(row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
