use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：1 (标题行) + 1 (下边框)
pub const HEADER_HEIGHT: u16 = 2;

/// 标题
pub const APP_TITLE: &str = "Task List";

/// 渲染顶部标题栏（标题 + 任务数）
pub fn render(frame: &mut Frame, area: Rect, task_count: usize, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        format!(" {}", APP_TITLE),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    );

    let right = Span::styled(count_label(task_count), Style::default().fg(colors.muted));

    // 计算中间填充空格
    let total_width = inner_area.width as usize;
    let used_width = left.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), inner_area);
}

fn count_label(task_count: usize) -> String {
    match task_count {
        1 => "1 task ".to_string(),
        n => format!("{} tasks ", n),
    }
}
