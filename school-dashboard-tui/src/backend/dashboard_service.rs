//! 仪表盘服务
//!
//! Backend 层的入口，封装 school-dashboard-core 的 Dashboard。
//! 负责创建各个宿主适配器并注入 DashboardContext：
//!     1. DomStore（元素仓库，ViewSurface）
//!     2. HistoryLocation（地址与历史，Location）
//!     3. TerminalViewport / TerminalFullscreen（环境）
//!     4. StatusProfileViewer（查看档案）
//!
//! 打开另一个页面相当于加载一个新文档：元素仓库、历史和 Dashboard 全部重建。

use std::fs;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use anyhow::{Context, Result};

use school_dashboard_core::services::DashboardOutcome;
use school_dashboard_core::traits::InMemoryStudentProvider;
use school_dashboard_core::types::ModuleId;
use school_dashboard_core::{
    CoreResult, Dashboard, DashboardConfig, DashboardContext, DashboardEvent, StudentProvider,
};

use super::{
    DomStore, HistoryLocation, StatusProfileViewer, TerminalFullscreen, TerminalViewport, TuiConfig,
};

/// 从 JSON 文件加载学生数据
pub fn load_students(path: &Path) -> Result<InMemoryStudentProvider> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read students file {}", path.display()))?;
    let provider = InMemoryStudentProvider::from_json(&content)
        .with_context(|| format!("Failed to parse students file {}", path.display()))?;
    tracing::info!(
        count = provider.students().len(),
        path = %path.display(),
        "Students loaded"
    );
    Ok(provider)
}

/// 一个页面上的仪表盘及其宿主适配器
pub struct DashboardService {
    config: DashboardConfig,
    students: Arc<dyn StudentProvider>,
    viewport: Arc<TerminalViewport>,
    fullscreen: Arc<TerminalFullscreen>,
    fullscreen_changes: Receiver<bool>,
    profile_viewer: Arc<StatusProfileViewer>,
    store: Arc<DomStore>,
    location: Arc<HistoryLocation>,
    dashboard: Dashboard,
}

impl DashboardService {
    /// 创建并启动起始页面
    ///
    /// # Arguments
    /// * `columns` - 当前终端宽度
    /// * `fragment` - 初始地址片段（深链接）
    pub fn new(
        config: &TuiConfig,
        students: Arc<dyn StudentProvider>,
        columns: u16,
        fragment: &str,
    ) -> Result<Self> {
        let dashboard_config = config.dashboard_config();
        let viewport = Arc::new(TerminalViewport::new(columns));
        let (fullscreen, fullscreen_changes) = TerminalFullscreen::new(config.allow_fullscreen);
        let fullscreen = Arc::new(fullscreen);
        let profile_viewer = Arc::new(StatusProfileViewer::new());

        let (store, location, dashboard) = load_page(
            &dashboard_config,
            &config.page,
            fragment,
            &students,
            &viewport,
            &fullscreen,
            &profile_viewer,
        )?;

        Ok(Self {
            config: dashboard_config,
            students,
            viewport,
            fullscreen,
            fullscreen_changes,
            profile_viewer,
            store,
            location,
            dashboard,
        })
    }

    /// 打开另一个页面并显示其中的模块
    pub fn open_page(&mut self, page: &str, module: &ModuleId) -> Result<()> {
        let (store, location, dashboard) = load_page(
            &self.config,
            page,
            module.as_str(),
            &self.students,
            &self.viewport,
            &self.fullscreen,
            &self.profile_viewer,
        )?;

        self.store = store;
        self.location = location;
        self.dashboard = dashboard;
        Ok(())
    }

    /// 把宿主事件交给仪表盘
    pub fn handle(&mut self, event: DashboardEvent) -> CoreResult<DashboardOutcome> {
        tracing::debug!(?event, "Dispatching");
        self.dashboard.handle(event)
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &DomStore {
        &self.store
    }

    pub fn location(&self) -> &HistoryLocation {
        &self.location
    }

    pub fn students(&self) -> &dyn StudentProvider {
        self.students.as_ref()
    }

    /// 终端尺寸变化
    ///
    /// 只更新视口；布局在下一次切换侧边栏时才重新判断。
    pub fn resize(&self, columns: u16) {
        self.viewport.set_columns(columns);
    }

    /// 取出已完成的全屏状态变化，并同步到控制器
    pub fn drain_fullscreen_changes(&self) -> Vec<bool> {
        let changes: Vec<bool> = self.fullscreen_changes.try_iter().collect();
        for active in &changes {
            self.fullscreen.set_active(*active);
        }
        changes
    }

    /// 待显示的档案消息
    pub fn take_profile_message(&self) -> Option<String> {
        self.profile_viewer.take_message()
    }
}

/// 为页面创建文档、历史与仪表盘并启动
fn load_page(
    config: &DashboardConfig,
    page: &str,
    fragment: &str,
    students: &Arc<dyn StudentProvider>,
    viewport: &Arc<TerminalViewport>,
    fullscreen: &Arc<TerminalFullscreen>,
    profile_viewer: &Arc<StatusProfileViewer>,
) -> Result<(Arc<DomStore>, Arc<HistoryLocation>, Dashboard)> {
    let store = Arc::new(DomStore::for_page(config, page)?);
    let location = Arc::new(HistoryLocation::new(fragment));

    let ctx = DashboardContext::new(
        store.clone(),
        location.clone(),
        viewport.clone(),
        fullscreen.clone(),
        students.clone(),
        profile_viewer.clone(),
    );
    let mut dashboard = Dashboard::new(ctx, config, page)
        .with_context(|| format!("Failed to create the dashboard for page '{page}'"))?;
    dashboard.start();

    tracing::info!(page, fragment, "Page loaded");
    Ok((store, location, dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_dashboard_core::{Location, ViewSurface};

    fn service(page: &str, columns: u16, fragment: &str) -> DashboardService {
        let config = TuiConfig {
            page: page.to_string(),
            ..TuiConfig::default()
        };
        DashboardService::new(
            &config,
            Arc::new(InMemoryStudentProvider::sample()),
            columns,
            fragment,
        )
        .unwrap()
    }

    #[test]
    fn test_start_applies_deep_link() {
        let service = service("student-management", 140, "#summary");

        assert!(service.store().is_visible("summary-module"));
        assert!(!service.store().is_visible("admission-module"));
        assert_eq!(service.location().fragment(), "summary");
    }

    #[test]
    fn test_narrow_terminal_starts_with_closed_drawer() {
        let service = service("student-management", 80, "");

        assert!(!service.dashboard().state().sidebar_open);
        assert!(!service.store().has_class("overlay", "active"));
    }

    #[test]
    fn test_open_page_rebuilds_document() {
        let mut service = service("home", 140, "");
        assert!(!service.store().contains("student-table"));

        service
            .open_page("student-management", &ModuleId::from("student-list"))
            .unwrap();

        assert_eq!(service.dashboard().page(), "student-management");
        assert!(service.store().is_visible("student-list-module"));
        assert_eq!(service.location().fragment(), "student-list");
    }

    #[test]
    fn test_fullscreen_change_arrives_on_drain() {
        let mut service = service("home", 140, "");

        service.handle(DashboardEvent::FullscreenClicked).unwrap();
        assert!(!service.dashboard().state().fullscreen);

        assert_eq!(service.drain_fullscreen_changes(), vec![true]);
        service
            .handle(DashboardEvent::FullscreenChanged(true))
            .unwrap();
        assert!(service.dashboard().state().fullscreen);
        assert!(service.store().has_class("fullscreen-btn", "fa-compress"));
    }

    #[test]
    fn test_view_profile_posts_message() {
        let mut service = service("student-management", 140, "student-list");

        service
            .handle(DashboardEvent::ViewProfileClicked("S-10235".to_string()))
            .unwrap();

        assert_eq!(
            service.take_profile_message().as_deref(),
            Some("Opening profile for student S-10235.")
        );
    }
}
