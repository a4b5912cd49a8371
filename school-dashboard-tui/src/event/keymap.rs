//! 快捷键配置
//!
//! 普通字母快捷键只在没有文本输入时生效；
//! 带 Alt / Ctrl 的快捷键任何时候都可用。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FOCUS_SWITCH: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 历史
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // 外壳
    pub const TOGGLE_SIDEBAR: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const SETTINGS: KeyBinding = KeyBinding::key(KeyCode::Char('s'));
    pub const THEME: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const FULLSCREEN: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const GOTO: KeyBinding = KeyBinding::key(KeyCode::Char('g'));

    // 向导
    pub const WIZARD_NEXT: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));
    pub const WIZARD_PREV: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));

    // 学生列表
    pub const RESET_FILTERS: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const VIEW_PROFILE: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
}
