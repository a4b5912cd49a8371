//! 内容面板类型
//!
//! 核心只知道模块 id；终端版需要知道用哪个页面组件来渲染它。

use school_dashboard_core::types::ModuleId;

/// 内容面板的渲染方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPage {
    /// 首页概览
    Overview,
    /// 录取向导
    Admission,
    /// 学生列表
    StudentList,
    /// 尚未实现内容的模块
    Placeholder,
}

impl ContentPage {
    pub fn for_module(module: &ModuleId) -> Self {
        match module.as_str() {
            "dashboard" => Self::Overview,
            "admission" => Self::Admission,
            "student-list" => Self::StudentList,
            _ => Self::Placeholder,
        }
    }

    /// 是否有文本输入（此时普通字母键不作为全局快捷键）
    pub fn takes_text(self) -> bool {
        matches!(self, Self::Admission | Self::StudentList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_mapping() {
        assert_eq!(
            ContentPage::for_module(&ModuleId::from("student-list")),
            ContentPage::StudentList
        );
        assert_eq!(
            ContentPage::for_module(&ModuleId::from("oldstudentrec")),
            ContentPage::Placeholder
        );
        assert!(!ContentPage::Overview.takes_text());
    }
}
