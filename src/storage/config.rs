//! 应用配置
//!
//! 只保存界面偏好，任务本身从不落盘。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::taskpad_dir;
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
}

fn default_theme_name() -> String {
    "Auto".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

/// Toast 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// 显示时长（毫秒）
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,
    /// 提交空白任务时的提示
    #[serde(default = "default_empty_task_message")]
    pub empty_task_message: String,
}

fn default_toast_duration_ms() -> u64 {
    2000
}

fn default_empty_task_message() -> String {
    "Task cannot be empty".to_string()
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
            empty_task_message: default_empty_task_message(),
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// trace / debug / info / warn / error，RUST_LOG 优先
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 日志文件路径，默认 ~/.taskpad/taskpad.log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// 默认配置文件路径: ~/.taskpad/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    Ok(taskpad_dir()?.join("config.toml"))
}

/// 读取并解析配置文件
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 加载配置（不存在或无法解析时返回默认值）
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    read_config(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
        Config::default()
    })
}

/// 保存配置
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
