use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        handle_event(app, event::read()?);
    }

    Ok(!app.should_quit)
}

/// 分发单个事件
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            // 只处理按下事件
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if !app.ui.show_help {
                app.paste(&text);
            }
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板
    if app.ui.show_help {
        handle_help_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            // 清空输入
            KeyCode::Char('u') => app.clear_input(),
            // 切换主题
            KeyCode::Char('t') => app.cycle_theme(),
            _ => {}
        }
        return;
    }

    match key.code {
        // 退出
        KeyCode::Esc => app.quit(),

        // 帮助
        KeyCode::F(1) => app.ui.toggle_help(),

        // 提交
        KeyCode::Enter => {
            app.submit();
        }

        // 删除字符
        KeyCode::Backspace => app.delete_char(),

        // 列表导航
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // 输入字符
        KeyCode::Char(c) => app.input_char(c),

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
        app.ui.show_help = false;
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.ui.show_help {
        return;
    }

    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.ui.click_areas.hits_add_button(col, row) {
                app.submit();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.ui.click_areas.hits_task_list(col, row) {
                app.select_next();
            }
        }
        MouseEventKind::ScrollUp => {
            if app.ui.click_areas.hits_task_list(col, row) {
                app.select_previous();
            }
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn test_app() -> App {
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        App::new(&config, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        handle_event(
            app,
            Event::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
        );
    }

    #[test]
    fn test_type_and_enter_adds_task() {
        let mut app = test_app();
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].text(), "Buy milk");
        assert_eq!(app.store.pending_input(), "");
    }

    #[test]
    fn test_enter_on_blank_shows_toast() {
        let mut app = test_app();
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.store.is_empty());
        assert_eq!(app.store.pending_input(), "   ");
        assert!(app.ui.toast.is_some());
    }

    #[test]
    fn test_shifted_chars_are_input() {
        let mut app = test_app();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        );
        assert_eq!(app.store.pending_input(), "A");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        handle_event(&mut app, Event::Key(key));
        assert_eq!(app.store.pending_input(), "");
    }

    #[test]
    fn test_backspace_and_ctrl_u() {
        let mut app = test_app();
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store.pending_input(), "ab");

        ctrl(&mut app, 'u');
        assert_eq!(app.store.pending_input(), "");
    }

    #[test]
    fn test_ctrl_t_cycles_theme_without_typing() {
        let mut app = test_app();
        let before = app.ui.theme;
        ctrl(&mut app, 't');
        assert_eq!(app.ui.theme, before.next());
        assert_eq!(app.store.pending_input(), "");
    }

    #[test]
    fn test_help_swallows_input() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(1));
        assert!(app.ui.show_help);

        type_text(&mut app, "x");
        handle_event(&mut app, Event::Paste("pasted".to_string()));
        assert_eq!(app.store.pending_input(), "");

        // Esc 先关闭帮助，不退出
        press(&mut app, KeyCode::Esc);
        assert!(!app.ui.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        app.ui.show_help = true;
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_event() {
        let mut app = test_app();
        handle_event(&mut app, Event::Paste("line one\nline two".to_string()));
        assert_eq!(app.store.pending_input(), "line one line two");
    }

    #[test]
    fn test_arrow_navigation() {
        let mut app = test_app();
        for text in ["A", "B", "C"] {
            type_text(&mut app, text);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Home);
        assert_eq!(app.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(1));
        press(&mut app, KeyCode::End);
        assert_eq!(app.list_state.selected(), Some(2));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn test_click_add_button() {
        let mut app = test_app();
        app.ui.click_areas.add_button = Some(Rect::new(40, 18, 8, 1));
        type_text(&mut app, "Clicked");

        // 点在按钮外不提交
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 18);
        assert!(app.store.is_empty());

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 42, 18);
        assert_eq!(app.store.tasks()[0].text(), "Clicked");
        assert_eq!(app.store.pending_input(), "");
    }

    #[test]
    fn test_scroll_over_list() {
        let mut app = test_app();
        app.ui.click_areas.task_list_area = Some(Rect::new(1, 3, 50, 10));
        for text in ["A", "B"] {
            type_text(&mut app, text);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Home);

        mouse(&mut app, MouseEventKind::ScrollDown, 5, 5);
        assert_eq!(app.list_state.selected(), Some(1));
        mouse(&mut app, MouseEventKind::ScrollUp, 5, 5);
        assert_eq!(app.list_state.selected(), Some(0));

        // 列表外滚动无效
        mouse(&mut app, MouseEventKind::ScrollDown, 5, 15);
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
