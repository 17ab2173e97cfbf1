//! taskpad 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理。

use std::io;
use thiserror::Error;

/// taskpad 错误类型
#[derive(Debug, Error)]
pub enum TaskpadError {
    /// 输入为空或只包含空白字符（可恢复，由调用方通过 Notifier 提示用户）
    #[error("task text is empty or blank")]
    EmptyOrBlankInput,

    /// I/O 错误（配置文件、日志文件等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// taskpad Result 类型别名
pub type Result<T> = std::result::Result<T, TaskpadError>;

impl TaskpadError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
