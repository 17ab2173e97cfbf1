//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast、点击区域等。

use std::time::{Duration, Instant};

use tracing::debug;

use crate::notifier::Notifier;
use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// Toast 显示时长
    pub toast_duration: Duration,
    /// 空任务提示文字
    pub empty_task_message: String,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, toast_duration: Duration, empty_task_message: String) -> Self {
        Self {
            toast: None,
            toast_duration,
            empty_task_message,
            theme,
            colors: get_theme_colors(theme),
            show_help: false,
            click_areas: ClickAreas::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, self.toast_duration));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 当前可见的 Toast
    pub fn visible_toast(&self) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| !t.is_expired())
    }

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme.next());
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }

    /// 切换帮助面板显示状态
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Notifier for UiState {
    fn notify_empty_task_error(&mut self) {
        debug!("empty task rejected");
        let message = self.empty_task_message.clone();
        self.show_toast(message);
    }
}

// ============================================================================
// Tests
// ============================================================================
