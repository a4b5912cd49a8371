//! 内容面板消息
//!
//! 录取向导与学生列表中的操作

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 光标 ==========
    /// 上一个控件 / 上一行
    SelectPrevious,
    /// 下一个控件 / 下一行
    SelectNext,

    // ========== 输入 ==========
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换复选框
    ToggleCheckbox,
    /// 切换到上一个选项（年级、学年）
    CyclePrev,
    /// 切换到下一个选项
    CycleNext,

    // ========== 向导 ==========
    /// 下一步 / 提交
    WizardNext,
    /// 上一步
    WizardPrev,

    // ========== 学生列表 ==========
    /// Enter：应用筛选，或在表格行上查看档案
    Confirm,
    /// 重置筛选
    ResetFilters,
    /// 查看选中行的档案
    ViewProfile,
}
