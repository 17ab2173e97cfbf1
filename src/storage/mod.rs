pub mod config;

use std::path::PathBuf;

use crate::error::{Result, TaskpadError};

/// 获取 ~/.taskpad/ 目录路径
pub fn taskpad_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".taskpad"))
        .ok_or_else(|| TaskpadError::config("cannot find home directory"))
}
