//! School Dashboard TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 宿主适配器与仪表盘 (`backend/`)
//!
//!
//! main.rs
//! School Dashboard TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Args::parse()           // 解析命令行参数
//!     config.load()           // 读取配置文件（不存在时使用默认配置）
//!     init_logging()          // 日志写入文件，终端留给界面
//!     DashboardService::new() // 创建起始页面的仪表盘
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 命令行参数会覆盖配置文件中的同名项：
//!     --config <PATH>         // 配置文件，默认 ~/.config/school-dashboard-tui/config.json
//!     --page <NAME>           // 起始页面
//!     --fragment <MODULE>     // 起始地址片段（深链接），如 student-list
//!     --students <PATH>       // 学生数据 JSON 文件

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use school_dashboard_core::traits::InMemoryStudentProvider;
use school_dashboard_core::StudentProvider;

use backend::{load_students, ConfigService, DashboardService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal, terminal_width};

/// 终端宽度未知时假定的列数
const FALLBACK_COLUMNS: u16 = 120;

#[derive(Parser, Debug)]
#[command(name = "school-dashboard", version, about = "School dashboard in the terminal")]
struct Args {
    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to open at startup
    #[arg(long)]
    page: Option<String>,

    /// Location fragment to start from, e.g. `student-list`
    #[arg(long, default_value = "")]
    fragment: String,

    /// Student records as a JSON array
    #[arg(long)]
    students: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // 1. 读取配置
    let config_service = args
        .config
        .map_or_else(JsonConfigService::default_location, JsonConfigService::new);
    let mut config = config_service.load()?;
    if let Some(page) = args.page {
        config.page = page;
    }
    if let Some(students) = args.students {
        config.students_file = Some(students);
    }

    // 2. 初始化日志
    init_logging(&config.log_path())?;
    tracing::info!(config = %config_service.path().display(), "School dashboard starting");

    // 首次启动时写出默认配置，方便用户编辑
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            tracing::warn!(error = %e, "Failed to write the default config file");
        }
    }

    // 3. 加载学生数据
    let students: Arc<dyn StudentProvider> = match &config.students_file {
        Some(path) => Arc::new(load_students(path)?),
        None => Arc::new(InMemoryStudentProvider::sample()),
    };

    // 4. 创建起始页面
    let columns = terminal_width().unwrap_or(FALLBACK_COLUMNS);
    let services = DashboardService::new(&config, students, columns, &args.fragment)
        .context("Failed to open the start page")?;

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例
    let mut app = model::App::new(services);

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "School dashboard stopped with an error");
    }

    // 9. 返回结果
    result
}
