//! 应用主状态结构

use school_dashboard_core::types::{ModuleId, TableBody};

use crate::backend::{DashboardService, FormControl};

use super::sidebar::sidebar_rows;
use super::state::{academic_years, AdmissionState, ModalState, StudentListState};
use super::{ContentPage, FocusPanel, SidebarRow, SidebarState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏选中状态
    pub sidebar: SidebarState,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各面板状态 ===
    /// 录取向导
    pub admission: AdmissionState,
    /// 学生列表
    pub student_list: StudentListState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前页面的仪表盘与宿主适配器
    pub services: DashboardService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(services: DashboardService) -> Self {
        let years = academic_years(services.students().students());
        Self {
            should_quit: false,
            focus: FocusPanel::Sidebar,
            sidebar: SidebarState::new(),
            status_message: None,
            admission: AdmissionState::new(),
            student_list: StudentListState::new(years),
            modal: ModalState::new(),
            services,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前显示的模块
    pub fn active_module(&self) -> Option<&ModuleId> {
        self.services.dashboard().state().active_module.as_ref()
    }

    /// 当前内容面板的渲染方式
    pub fn content_page(&self) -> ContentPage {
        self.active_module()
            .map_or(ContentPage::Placeholder, ContentPage::for_module)
    }

    /// 焦点在需要输入文本的面板上
    pub fn is_typing(&self) -> bool {
        self.focus.is_content() && self.content_page().takes_text()
    }

    /// 侧边栏当前的行
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        sidebar_rows(&self.services.config().menu, self.services.store())
    }

    /// 向导当前步骤的 section id
    pub fn admission_section(&self) -> Option<&str> {
        let wizard = self.services.dashboard().wizard()?;
        self.services
            .config()
            .wizard
            .steps
            .get(wizard.current_step())
            .map(|step| step.section.as_str())
    }

    /// 向导当前步骤的控件
    pub fn admission_controls(&self) -> Vec<FormControl> {
        self.admission_section()
            .map(|section| self.services.store().controls(section))
            .unwrap_or_default()
    }

    pub fn focused_control(&self) -> Option<FormControl> {
        self.admission_controls()
            .into_iter()
            .nth(self.admission.focused)
    }

    pub fn wizard_popup_open(&self) -> bool {
        self.services
            .dashboard()
            .wizard()
            .is_some_and(|wizard| wizard.popup_open())
    }

    /// 学生表格当前的数据行对应的学生 id
    pub fn table_student_ids(&self) -> Vec<String> {
        let table_id = &self.services.config().student_list.table;
        match self.services.store().table(table_id) {
            Some(TableBody::Rows(rows)) => rows
                .into_iter()
                .filter_map(|row| row.action.map(|action| action.value))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use school_dashboard_core::traits::InMemoryStudentProvider;

    use super::App;
    use crate::backend::{DashboardService, TuiConfig};

    /// 宽终端上打开指定页面
    pub fn test_app(page: &str, fragment: &str) -> App {
        let config = TuiConfig {
            page: page.to_string(),
            ..TuiConfig::default()
        };
        let services = DashboardService::new(
            &config,
            Arc::new(InMemoryStudentProvider::sample()),
            160,
            fragment,
        )
        .unwrap();
        App::new(services)
    }
}
