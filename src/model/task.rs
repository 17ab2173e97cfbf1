use std::fmt;

use crate::error::{Result, TaskpadError};

use super::validator;

/// 一条已提交的任务
///
/// 只能通过 [`Task::parse`] 构造，所以文本一定是去掉首尾空白后的非空字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    text: String,
}

impl Task {
    /// 校验并规范化输入，生成 Task
    pub fn parse(text: &str) -> Result<Self> {
        if !validator::is_valid(text) {
            return Err(TaskpadError::EmptyOrBlankInput);
        }
        Ok(Self {
            text: validator::normalize(text).to_string(),
        })
    }

    /// 显示文本
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
