//! 终端环境：视口宽度与“全屏”
//!
//! 实现 school-dashboard-core 的 Viewport 与 FullscreenControl trait。
//!
//! 终端没有真正的全屏 API，这里把“全屏”定义为隐藏标题栏和状态栏。
//! 请求不会同步生效：状态变化通过 channel 投递，主循环在下一轮取出后
//! 再通知核心（`DashboardEvent::FullscreenChanged`）。

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use school_dashboard_core::{CoreError, CoreResult, FullscreenControl, Viewport};

/// 以终端列数为宽度的视口
#[derive(Debug)]
pub struct TerminalViewport {
    columns: AtomicU32,
}

impl TerminalViewport {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: AtomicU32::new(u32::from(columns)),
        }
    }

    /// 终端尺寸变化时更新
    pub fn set_columns(&self, columns: u16) {
        self.columns.store(u32::from(columns), Ordering::SeqCst);
    }
}

impl Viewport for TerminalViewport {
    fn width(&self) -> u32 {
        self.columns.load(Ordering::SeqCst)
    }
}

/// 终端“全屏”控制
#[derive(Debug)]
pub struct TerminalFullscreen {
    enabled: bool,
    active: AtomicBool,
    changes: Sender<bool>,
}

impl TerminalFullscreen {
    /// 创建控制器，同时返回状态变化的接收端
    pub fn new(enabled: bool) -> (Self, Receiver<bool>) {
        let (changes, receiver) = mpsc::channel();
        let control = Self {
            enabled,
            active: AtomicBool::new(false),
            changes,
        };
        (control, receiver)
    }

    /// 主循环确认状态变化后调用
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }

    fn send(&self, active: bool) -> CoreResult<()> {
        if !self.enabled {
            return Err(CoreError::FullscreenUnavailable);
        }
        self.changes
            .send(active)
            .map_err(|_| CoreError::FullscreenDenied("event loop is gone".to_string()))
    }
}

impl FullscreenControl for TerminalFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn request(&self) -> CoreResult<()> {
        self.send(true)
    }

    fn exit(&self) -> CoreResult<()> {
        self.send(false)
    }
}
