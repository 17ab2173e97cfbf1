//! 任务列表卡片
//!
//! 列表为空时显示空状态，否则按插入顺序每个任务一行。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

use super::empty_state;

/// 渲染任务列表卡片，返回列表内容区域（用于滚轮检测）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    list_state: &mut ListState,
    colors: &ThemeColors,
) -> Rect {
    let block = Block::default()
        .title(" Tasks ")
        .title_style(Style::default().fg(colors.muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);

    if tasks.is_empty() {
        frame.render_widget(block, area);
        empty_state::render(frame, inner_area, colors);
        return inner_area;
    }

    // 序号宽度随任务数增长
    let digits = tasks.len().to_string().len();

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>width$}. ", i + 1, width = digits),
                    Style::default().fg(colors.index),
                ),
                Span::styled(task.text(), Style::default().fg(colors.text)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, list_state);
    inner_area
}
