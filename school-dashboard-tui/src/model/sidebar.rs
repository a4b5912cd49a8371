//! 侧边栏行
//!
//! 侧边栏的行由菜单配置和元素仓库共同决定：
//! 分组标题总是存在，子菜单里的链接只在子菜单展开（`show`）时出现。

use school_dashboard_core::config::MenuEntryConfig;
use school_dashboard_core::DashboardEvent;

use crate::backend::DomStore;

/// 侧边栏中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    /// 顶层项（普通项或分组标题）
    Entry {
        element_id: String,
        label: String,
        group: bool,
        expanded: bool,
    },
    /// 子菜单链接
    Link { element_id: String, label: String },
}

impl SidebarRow {
    pub fn element_id(&self) -> &str {
        match self {
            Self::Entry { element_id, .. } | Self::Link { element_id, .. } => element_id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Entry { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// 激活这一行时发给仪表盘的事件
    pub fn event(&self) -> DashboardEvent {
        match self {
            Self::Entry { element_id, .. } => DashboardEvent::MenuEntryClicked(element_id.clone()),
            Self::Link { element_id, .. } => DashboardEvent::SubmenuLinkClicked(element_id.clone()),
        }
    }
}

/// 按当前文档状态展开菜单
pub fn sidebar_rows(menu: &[MenuEntryConfig], store: &DomStore) -> Vec<SidebarRow> {
    let mut rows = Vec::new();

    for entry in menu {
        match entry {
            MenuEntryConfig::Leaf { id, label, .. } => rows.push(SidebarRow::Entry {
                element_id: id.clone(),
                label: label.clone(),
                group: false,
                expanded: false,
            }),
            MenuEntryConfig::Group {
                label,
                header,
                submenu,
                links,
                ..
            } => {
                let expanded = store.has_class(submenu, "show");
                rows.push(SidebarRow::Entry {
                    element_id: header.clone(),
                    label: label.clone(),
                    group: true,
                    expanded,
                });
                if expanded {
                    rows.extend(links.iter().map(|link| SidebarRow::Link {
                        element_id: link.id.clone(),
                        label: link.label.clone(),
                    }));
                }
            }
        }
    }

    rows
}

/// 侧边栏选中状态
#[derive(Debug, Default)]
pub struct SidebarState {
    /// 当前选中的行
    pub selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 子菜单收起后行数变少，选中项跟着收回
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
