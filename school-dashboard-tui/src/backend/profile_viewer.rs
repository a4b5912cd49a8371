//! “查看档案”动作
//!
//! 终端版没有档案页，点击后记录日志并在状态栏显示一条消息。

use std::sync::{Mutex, PoisonError};

use school_dashboard_core::ProfileViewer;

/// 把档案请求转成状态栏消息
#[derive(Debug, Default)]
pub struct StatusProfileViewer {
    pending: Mutex<Option<String>>,
}

impl StatusProfileViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出待显示的消息
    pub fn take_message(&self) -> Option<String> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl ProfileViewer for StatusProfileViewer {
    fn open_profile(&self, student_id: &str) {
        tracing::info!(student_id, "Profile requested");
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(format!("Opening profile for student {student_id}."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_taken_once() {
        let viewer = StatusProfileViewer::new();
        viewer.open_profile("S-10234");

        assert_eq!(
            viewer.take_message().as_deref(),
            Some("Opening profile for student S-10234.")
        );
        assert_eq!(viewer.take_message(), None);
    }
}
