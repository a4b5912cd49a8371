//! 主布局
//!
//! 外壳的各个部分都从元素仓库读取：
//!     根元素的主题 class      → 配色
//!     sidebar.collapsed       → 宽布局下侧边栏收成窄条
//!     sidebar.open            → 窄布局下抽屉盖在内容上
//!     settings-panel.show     → 设置面板
//!     全屏状态                → 隐藏标题栏与状态栏

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use school_dashboard_core::types::Theme;

use crate::model::{App, ContentPage};

use super::components;
use super::pages;
use super::theme::{self, colors, Styles};

/// 窄条侧边栏的宽度
const COLLAPSED_SIDEBAR_WIDTH: u16 = 6;

/// 抽屉的最大宽度
const DRAWER_WIDTH: u16 = 30;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let store = app.services.store();
    let shell = &app.services.config().shell;
    let state = app.services.dashboard().state();

    let theme = if store.has_class(&shell.root, Theme::Dark.class_name()) {
        Theme::Dark
    } else {
        Theme::Light
    };
    theme::set_theme(theme);
    let c = colors();

    let size = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        size,
    );

    // 三层布局：标题栏 + 主内容区 + 状态栏；全屏时只保留主内容区
    let body_area = if state.fullscreen {
        size
    } else {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 标题栏
                Constraint::Min(1),    // 主内容区
                Constraint::Length(1), // 状态栏
            ])
            .split(size);

        render_title_bar(app, frame, main_layout[0]);
        components::statusbar::render(app, frame, main_layout[2]);
        main_layout[1]
    };

    if state.layout.is_mobile() {
        // 内容占满，抽屉打开时盖在左侧
        render_page_content(app, frame, body_area);
        if store.has_class(&shell.sidebar, "open") {
            let drawer = Rect::new(
                body_area.x,
                body_area.y,
                DRAWER_WIDTH.min(body_area.width),
                body_area.height,
            );
            frame.render_widget(Clear, drawer);
            components::sidebar::render(app, frame, drawer, false);
        }
    } else {
        let collapsed = store.has_class(&shell.sidebar, "collapsed");
        let sidebar_width = if collapsed {
            Constraint::Length(COLLAPSED_SIDEBAR_WIDTH)
        } else {
            Constraint::Percentage(20)
        };

        // 左右分栏布局
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([sidebar_width, Constraint::Min(1)])
            .split(body_area);

        components::sidebar::render(app, frame, columns[0], collapsed);
        render_page_content(app, frame, columns[1]);
    }

    if store.has_class(&shell.settings_panel, "show") {
        components::settings::render(app, frame, body_area);
    }

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let store = app.services.store();
    let shell = &app.services.config().shell;

    let menu_icon = if store.has_class(&shell.menu_icon, "fa-chevron-left") {
        "«"
    } else {
        "☰"
    };
    let page_title = app
        .services
        .config()
        .page(app.services.dashboard().page())
        .map(|host| host.title.as_str())
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::raw(format!(" {menu_icon} ")),
        Span::styled("School Dashboard", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" │ {page_title}")),
    ]);
    let paragraph =
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

/// 根据当前模块渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_content();

    let block = Block::default()
        .title(format!(" {} ", module_title(app)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_for(is_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.content_page() {
        ContentPage::Overview => pages::overview::render(app, frame, inner_area),
        ContentPage::Admission => pages::admission::render(app, frame, inner_area),
        ContentPage::StudentList => pages::student_list::render(app, frame, inner_area),
        ContentPage::Placeholder => pages::placeholder::render(app, frame, inner_area),
    }
}

/// 当前模块的标题，找不到时退回页面标题
pub(super) fn module_title(app: &App) -> String {
    let config = app.services.config();
    let Ok(host) = config.page(app.services.dashboard().page()) else {
        return String::new();
    };
    app.active_module()
        .and_then(|active| host.module(active))
        .map_or_else(|| host.title.clone(), |module| module.title.clone())
}
