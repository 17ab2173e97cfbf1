use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(has_items);

    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn get_shortcuts(has_items: bool) -> Vec<(&'static str, &'static str)> {
    if has_items {
        vec![
            ("Enter", "add"),
            ("↑↓", "scroll"),
            ("^U", "clear"),
            ("^T", "theme"),
            ("F1", "help"),
            ("Esc", "quit"),
        ]
    } else {
        vec![
            ("Enter", "add"),
            ("^U", "clear"),
            ("^T", "theme"),
            ("F1", "help"),
            ("Esc", "quit"),
        ]
    }
}
