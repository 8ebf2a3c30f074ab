//! 键盘事件映射 (Input -> Action)

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;

/// 获取按键对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Left => Some(Action::Answer(true)),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Right => Some(Action::Answer(false)),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(Action::Next)
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
