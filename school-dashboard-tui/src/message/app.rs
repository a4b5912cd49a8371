//! 应用主消息枚举

use school_dashboard_core::DashboardEvent;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（侧边栏 / 内容）
    ToggleFocus,

    /// 侧边栏相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 直接转发给仪表盘的事件（菜单按钮、主题、设置、全屏……）
    Dashboard(DashboardEvent),

    /// 历史后退
    HistoryBack,

    /// 历史前进
    HistoryForward,

    /// Esc：关闭最上层的东西（设置面板、抽屉遮罩）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 打开地址栏
    ShowGoTo,

    /// 终端宽度变化
    Resize(u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
