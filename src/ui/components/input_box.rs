//! 输入卡片：单行输入框 + Add 按钮

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthChar;

use crate::theme::ThemeColors;

/// 输入卡片高度：上下边框 + 1 行输入
pub const INPUT_HEIGHT: u16 = 3;

pub const INPUT_LABEL: &str = " New task ";
pub const INPUT_PLACEHOLDER: &str = "Type a task and press Enter";
pub const ADD_BUTTON: &str = "[ Add ]";

/// 渲染输入卡片，返回 Add 按钮区域
pub fn render(frame: &mut Frame, area: Rect, input: &str, colors: &ThemeColors) -> Rect {
    let block = Block::default()
        .title(INPUT_LABEL)
        .title_style(Style::default().fg(colors.highlight))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_width = ADD_BUTTON.chars().count() as u16 + 1;
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(button_width)])
            .areas(inner_area);

    // 预留 1 列给前导空格、1 列给光标
    let max_cols = (field_area.width as usize).saturating_sub(2);

    let field_line = if input.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("█", Style::default().fg(colors.highlight)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(colors.muted)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(visible_tail(input, max_cols), Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.highlight)), // 光标
        ])
    };
    frame.render_widget(Paragraph::new(field_line), field_area);

    let button = Paragraph::new(Line::from(Span::styled(
        ADD_BUTTON,
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(button, button_area);

    button_area
}

/// 输入过长时只显示显示宽度不超过 `max_cols` 的末尾部分，光标始终可见
///
/// 按终端列宽计算，CJK 等宽字符占 2 列。
fn visible_tail(text: &str, max_cols: usize) -> &str {
    let mut cols = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if cols + w > max_cols {
            break;
        }
        cols += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_short_text() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("", 0), "");
    }

    #[test]
    fn test_visible_tail_truncates_front() {
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn test_visible_tail_counts_wide_chars_as_two_columns() {
        assert_eq!(visible_tail("多字节文本", 4), "文本");
        // 奇数列宽放不下半个宽字符
        assert_eq!(visible_tail("多字节文本", 5), "文本");
        assert_eq!(visible_tail("字字END", 5), "字END");
        assert_eq!(visible_tail("字", 1), "");
    }
}
