//! 校验失败的提示通道
//!
//! 核心只发出"失败类型"，消息文本和展示方式由实现方决定。

/// 向用户提示校验失败
pub trait Notifier {
    /// 用户尝试提交空白任务
    fn notify_empty_task_error(&mut self);
}

/// 只计数的 Notifier，测试用
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CountingNotifier {
    pub empty_task_errors: usize,
}

#[cfg(test)]
impl Notifier for CountingNotifier {
    fn notify_empty_task_error(&mut self) {
        self.empty_task_errors += 1;
    }
}
