use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

/// Handles a key on the month grid. Returns true when the application should exit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') | KeyCode::Left => state.move_days(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_days(1),
        KeyCode::Char('j') | KeyCode::Down => state.move_days(7),
        KeyCode::Char('k') | KeyCode::Up => state.move_days(-7),
        KeyCode::Char('{') | KeyCode::Char('p') | KeyCode::PageUp => state.prev_month(),
        KeyCode::Char('}') | KeyCode::Char('n') | KeyCode::PageDown => state.next_month(),
        KeyCode::Char('t') => state.jump_to_today(),
        KeyCode::Enter | KeyCode::Char('a') => state.open_panel(),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = !state.show_help,
        _ => {}
    }
    false
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}
