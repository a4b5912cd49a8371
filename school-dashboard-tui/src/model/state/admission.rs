//! 录取向导面板状态

/// 当前步骤中获得焦点的控件
#[derive(Debug, Default)]
pub struct AdmissionState {
    pub focused: usize,
}

impl AdmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_field(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn next_field(&mut self, count: usize) {
        if self.focused + 1 < count {
            self.focused += 1;
        }
    }

    /// 步骤切换后回到第一个控件
    pub fn reset(&mut self) {
        self.focused = 0;
    }
}
