//! 任务列表状态容器
//!
//! 持有任务列表和待提交输入，是二者唯一的修改入口。每次修改都会同步通知订阅者，
//! 渲染层在处理下一个事件之前就能看到最新状态。

use std::fmt;

use tracing::debug;

use crate::error::Result;

use super::task::Task;

/// 状态变化事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// 待提交输入被替换
    PendingInputChanged,
    /// 任务追加到列表末尾
    TaskAdded { index: usize },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// 渲染用的只读快照
#[derive(Debug, Clone, Copy)]
pub struct TaskListSnapshot<'a> {
    pub tasks: &'a [Task],
    pub pending_input: &'a str,
    pub revision: u64,
}

impl TaskListSnapshot<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// 任务列表 + 待提交输入
#[derive(Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    pending_input: String,
    /// 每次成功修改 +1
    revision: u64,
    listeners: Vec<Listener>,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 原样替换待提交输入（不校验、不 trim）
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
        self.bump(StoreEvent::PendingInputChanged);
    }

    /// 校验并追加任务
    ///
    /// 失败时不做任何修改，返回 [`TaskpadError::EmptyOrBlankInput`]。
    /// 成功后由调用方负责清空待提交输入。
    ///
    /// [`TaskpadError::EmptyOrBlankInput`]: crate::error::TaskpadError::EmptyOrBlankInput
    pub fn try_add_task(&mut self, text: &str) -> Result<&Task> {
        let task = Task::parse(text)?;
        let index = self.tasks.len();
        debug!(index, len = task.text().len(), "task added");
        self.tasks.push(task);
        self.bump(StoreEvent::TaskAdded { index });
        Ok(&self.tasks[index])
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn snapshot(&self) -> TaskListSnapshot<'_> {
        TaskListSnapshot {
            tasks: self.tasks(),
            pending_input: &self.pending_input,
            revision: self.revision,
        }
    }

    /// 注册订阅者，每次修改后同步调用
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn bump(&mut self, event: StoreEvent) {
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("pending_input", &self.pending_input)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
