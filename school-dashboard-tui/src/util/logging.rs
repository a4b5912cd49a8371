//! 日志初始化
//!
//! TUI 运行在原始模式的备用屏幕上，任何写到 stdout/stderr 的日志都会弄乱界面，
//! 所以日志只写入文件。核心库通过 `log` 门面输出的记录由 tracing-subscriber
//! 的 log 兼容层一并收集。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化文件日志，级别由 `RUST_LOG` 控制，默认 info
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(())
}
