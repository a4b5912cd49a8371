//! 首页概览

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use school_dashboard_core::types::GradeLevel;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let students = app.services.students().students();

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the School Dashboard",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Admissions, student records and fees in one place",
            Styles::muted(),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    // 学生总数与学年数
    let years = app.student_list.years.len();
    let totals = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", students.len()),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("  students enrolled", Styles::muted())),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {years}"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("  academic years", Styles::muted())),
    ])
    .block(
        Block::default()
            .title(" Students ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(totals, stats_layout[0]);

    // 各年级人数
    let mut grade_lines = vec![Line::from("")];
    for grade in GradeLevel::all() {
        let count = students.iter().filter(|s| s.grade_level == *grade).count();
        grade_lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", grade.label()), Style::default().fg(c.fg)),
            Span::styled(
                format!("{count:>4}"),
                Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    let grades = Paragraph::new(grade_lines).block(
        Block::default()
            .title(" By Grade ")
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(grades, stats_layout[1]);
}
