//! 配置服务
//!
//! 配置文件：~/.config/school-dashboard-tui/config.json
//! 文件不存在时使用默认配置；缺失的键取默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use school_dashboard_core::DashboardConfig;

/// 默认起始页面
pub const DEFAULT_PAGE: &str = "student-management";

/// 终端宽度（列）不超过此值时使用窄布局
pub const DEFAULT_COLUMN_BREAKPOINT: u32 = 100;

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("school-dashboard-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TuiConfig {
    /// 仪表盘配置（页面、菜单、向导……）
    pub dashboard: DashboardConfig,
    /// 窄布局断点，单位为终端列
    pub column_breakpoint: u32,
    /// 学生数据 JSON 文件，缺省时使用内置样例
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students_file: Option<PathBuf>,
    /// 启动时打开的页面
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub allow_fullscreen: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            column_breakpoint: DEFAULT_COLUMN_BREAKPOINT,
            students_file: None,
            page: DEFAULT_PAGE.to_string(),
            log_file: None,
            allow_fullscreen: true,
        }
    }
}

impl TuiConfig {
    /// 交给核心的配置：断点换算成终端列
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            mobile_breakpoint: self.column_breakpoint,
            ..self.dashboard.clone()
        }
    }

    /// 日志文件路径
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| get_config_dir().join("school-dashboard.log"))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<TuiConfig>;

    /// 保存配置
    fn save(&self, config: &TuiConfig) -> Result<()>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用默认位置
    pub fn default_location() -> Self {
        Self::new(get_config_dir().join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<TuiConfig> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No config file, using defaults");
            return Ok(TuiConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        config
            .dashboard
            .validate()
            .with_context(|| format!("Invalid dashboard configuration in {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &TuiConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_dashboard_core::types::ModuleId;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(dir.path().join("config.json"));

        assert_eq!(service.load().unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(dir.path().join("nested").join("config.json"));

        let mut config = TuiConfig::default();
        config.page = "home".to_string();
        config.allow_fullscreen = false;
        config.dashboard.landing_module_on_reset = ModuleId::from("summary");
        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"columnBreakpoint": 60}"#).unwrap();

        let config = JsonConfigService::new(&path).load().unwrap();
        assert_eq!(config.column_breakpoint, 60);
        assert_eq!(config.page, DEFAULT_PAGE);
        assert_eq!(config.dashboard_config().mobile_breakpoint, 60);
    }

    #[test]
    fn test_invalid_dashboard_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"dashboard": {"pages": []}}"#).unwrap();

        assert!(JsonConfigService::new(&path).load().is_err());
    }
}
