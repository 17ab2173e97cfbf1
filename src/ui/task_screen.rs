//! 主界面渲染
//!
//! 每次处理完事件后从 store 快照重绘：标题、任务列表（或空状态）、输入框、快捷键提示，
//! 以及 Toast 和帮助面板两个浮层。

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};
use tracing::trace;

use crate::app::App;

use super::components::{footer, header, help_panel, input_box, task_list, toast};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;
    let snapshot = app.store.snapshot();
    trace!(revision = snapshot.revision, "render");

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT), // 标题
        Constraint::Fill(1),                       // 任务列表
        Constraint::Length(input_box::INPUT_HEIGHT), // 输入框
        Constraint::Length(1),                     // Footer
    ])
    .horizontal_margin(1)
    .areas(area);

    header::render(frame, header_area, snapshot.tasks.len(), &colors);

    let list_inner = task_list::render(
        frame,
        list_area,
        snapshot.tasks,
        &mut app.list_state,
        &colors,
    );
    let add_button = input_box::render(frame, input_area, snapshot.pending_input, &colors);
    footer::render(frame, footer_area, !snapshot.is_empty(), &colors);

    app.ui.click_areas.task_list_area = Some(list_inner);
    app.ui.click_areas.add_button = Some(add_button);

    // 渲染 Toast
    if let Some(t) = app.ui.visible_toast() {
        toast::render(frame, &t.message, &colors);
    }

    // 渲染帮助面板
    if app.ui.show_help {
        help_panel::render(frame, &colors);
    }
}
