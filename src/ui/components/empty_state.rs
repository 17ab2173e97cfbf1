use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

pub const EMPTY_MESSAGE: &str = "No tasks yet";

/// 渲染空状态（列表为空时的占位提示）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type a task below and press ", Style::default().fg(colors.text)),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let text_height = lines.len() as u16;

    // 垂直居中
    let y_offset = area.height.saturating_sub(text_height) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: text_height.min(area.height),
    };

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint_widget, centered_area);
}
