//! 键盘事件映射 (Input -> Action)
//!
//! 只做按键到 Action 的翻译，十六进制合法性判定留给 dispatch

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::App;

/// 按键事件对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    // ^C / ^D 组合键先于普通字符判定
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit), // 任意位置的 q 都退出
        KeyCode::Up => Some(Action::Recall),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示退出会话
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
