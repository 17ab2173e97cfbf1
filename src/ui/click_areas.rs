use ratatui::layout::Rect;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// Add 按钮
    pub add_button: Option<Rect>,
    /// 任务列表区域（滚轮检测）
    pub task_list_area: Option<Rect>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.add_button = None;
        self.task_list_area = None;
    }

    /// 坐标是否落在 Add 按钮上
    pub fn hits_add_button(&self, col: u16, row: u16) -> bool {
        self.add_button.is_some_and(|rect| contains(&rect, col, row))
    }

    /// 坐标是否落在任务列表上
    pub fn hits_task_list(&self, col: u16, row: u16) -> bool {
        self.task_list_area.is_some_and(|rect| contains(&rect, col, row))
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
