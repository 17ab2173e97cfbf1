use std::path::PathBuf;

use ratatui::widgets::ListState;
use tracing::{debug, trace, warn};

use crate::model::TaskListStore;
use crate::notifier::Notifier;
use crate::storage::config::{self, Config};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 提交待输入文本
///
/// 成功时清空待提交输入；失败时通过 `notifier` 提示，输入保持不变。
/// 返回是否新增了任务。
pub fn submit_pending(store: &mut TaskListStore, notifier: &mut impl Notifier) -> bool {
    let pending = store.pending_input().to_string();
    match store.try_add_task(&pending) {
        Ok(_) => {
            store.set_pending_input("");
            true
        }
        // Task::parse 只会返回 EmptyOrBlankInput
        Err(_) => {
            notifier.notify_empty_task_error();
            false
        }
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表 + 待提交输入
    pub store: TaskListStore,
    /// UI 状态（主题、Toast、帮助面板、点击区域）
    pub ui: UiState,
    /// 列表选择状态（用于滚动浏览）
    pub list_state: ListState,
    /// 配置文件路径，切换主题时写回；None 表示不落盘
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: &Config, config_path: Option<PathBuf>) -> Self {
        let theme = Theme::from_name(&config.theme.name).unwrap_or_else(|| {
            warn!(name = %config.theme.name, "unknown theme, falling back to Auto");
            Theme::Auto
        });

        let mut store = TaskListStore::new();
        store.subscribe(|event| trace!(?event, "store changed"));

        Self {
            should_quit: false,
            store,
            ui: UiState::new(
                theme,
                config.toast.duration(),
                config.toast.empty_task_message.clone(),
            ),
            list_state: ListState::default(),
            config_path,
        }
    }

    // ========== Input ==========

    /// 输入字符
    pub fn input_char(&mut self, c: char) {
        let mut text = self.store.pending_input().to_string();
        text.push(c);
        self.store.set_pending_input(text);
    }

    /// 删除最后一个字符
    pub fn delete_char(&mut self) {
        let mut text = self.store.pending_input().to_string();
        if text.pop().is_some() {
            self.store.set_pending_input(text);
        }
    }

    /// 清空输入
    pub fn clear_input(&mut self) {
        if !self.store.pending_input().is_empty() {
            self.store.set_pending_input("");
        }
    }

    /// 粘贴文本（单行输入框，换行替换为空格）
    pub fn paste(&mut self, pasted: &str) {
        let mut text = self.store.pending_input().to_string();
        text.extend(
            pasted
                .chars()
                .filter(|c| *c != '\r')
                .map(|c| if c == '\n' { ' ' } else { c }),
        );
        self.store.set_pending_input(text);
    }

    /// 提交当前输入
    pub fn submit(&mut self) -> bool {
        let added = submit_pending(&mut self.store, &mut self.ui);
        if added {
            // 选中新任务，让列表滚动到底部
            self.list_state.select(Some(self.store.len() - 1));
        }
        added
    }

    // ========== List navigation ==========

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(self.store.len() - 1));
        }
    }

    // ========== Misc ==========

    /// 切换到下一个主题并写回配置
    pub fn cycle_theme(&mut self) {
        self.ui.cycle_theme();
        self.persist_theme();
    }

    fn persist_theme(&self) {
        let Some(ref path) = self.config_path else {
            return;
        };
        let mut cfg = config::load_config(path);
        cfg.theme.name = self.ui.theme.label().to_string();
        match config::save_config(path, &cfg) {
            Ok(()) => debug!(theme = self.ui.theme.label(), "theme saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to save theme"),
        }
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================
