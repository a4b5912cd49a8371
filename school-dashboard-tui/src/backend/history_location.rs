//! 地址与历史记录
//!
//! 实现 school-dashboard-core 的 Location trait。
//! 与浏览器的 hash 历史一致：push 会丢弃当前位置之后的“前进”记录，
//! replace 只改写当前记录。

use std::sync::{Mutex, MutexGuard, PoisonError};

use school_dashboard_core::Location;

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

/// 带前进/后退的内存历史
#[derive(Debug)]
pub struct HistoryLocation {
    history: Mutex<History>,
}

impl HistoryLocation {
    /// 以初始片段创建（可带前导 `#`）
    pub fn new(fragment: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![normalize(fragment)],
                cursor: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 后退一步，返回新的当前片段
    pub fn back(&self) -> Option<String> {
        let mut history = self.lock();
        if history.cursor == 0 {
            return None;
        }
        history.cursor -= 1;
        Some(history.entries[history.cursor].clone())
    }

    /// 前进一步，返回新的当前片段
    pub fn forward(&self) -> Option<String> {
        let mut history = self.lock();
        if history.cursor + 1 >= history.entries.len() {
            return None;
        }
        history.cursor += 1;
        Some(history.entries[history.cursor].clone())
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let history = self.lock();
        history.cursor + 1 < history.entries.len()
    }

    /// 全部历史记录（从旧到新）
    #[cfg(test)]
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }
}

fn normalize(fragment: &str) -> String {
    fragment.trim().trim_start_matches('#').to_string()
}

impl Location for HistoryLocation {
    fn fragment(&self) -> String {
        let history = self.lock();
        history.entries[history.cursor].clone()
    }

    fn push_fragment(&self, fragment: &str) {
        let mut history = self.lock();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(normalize(fragment));
        history.cursor = history.entries.len() - 1;
    }

    fn replace_fragment(&self, fragment: &str) {
        let mut history = self.lock();
        let cursor = history.cursor;
        history.entries[cursor] = normalize(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fragment_strips_hash() {
        let location = HistoryLocation::new("#summary");
        assert_eq!(location.fragment(), "summary");
        assert!(!location.can_go_back());
        assert!(!location.can_go_forward());
    }

    #[test]
    fn test_back_and_forward() {
        let location = HistoryLocation::new("");
        location.push_fragment("admission");
        location.push_fragment("summary");

        assert_eq!(location.back().as_deref(), Some("admission"));
        assert_eq!(location.back().as_deref(), Some(""));
        assert_eq!(location.back(), None);
        assert_eq!(location.forward().as_deref(), Some("admission"));
        assert_eq!(location.fragment(), "admission");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let location = HistoryLocation::new("admission");
        location.push_fragment("summary");
        location.push_fragment("migrate");
        location.back();
        location.back();

        location.push_fragment("quickedit");

        assert_eq!(location.entries(), vec!["admission", "quickedit"]);
        assert!(!location.can_go_forward());
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let location = HistoryLocation::new("does-not-exist");
        location.replace_fragment("admission");

        assert_eq!(location.entries(), vec!["admission"]);
        assert_eq!(location.fragment(), "admission");
    }
}
