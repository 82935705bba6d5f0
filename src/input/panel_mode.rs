use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::panel::PanelFocus;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match state.panel.focus() {
        Some(PanelFocus::Input) => handle_input_key(key, state),
        Some(PanelFocus::List) => handle_list_key(key, state),
        None => {}
    }
}

fn handle_input_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Enter => state.submit_panel(),
        KeyCode::Esc => state.panel.escape(),
        KeyCode::Tab | KeyCode::Down => state.panel.focus_list(),
        KeyCode::Backspace => state.panel.backspace(),
        KeyCode::Char(c) => state.panel.push_char(c),
        _ => {}
    }
}

fn handle_list_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => state.panel.move_highlight_down(&state.store),
        KeyCode::Char('k') | KeyCode::Up => state.panel.move_highlight_up(),
        KeyCode::Char('e') | KeyCode::Enter => state.edit_highlighted(),
        KeyCode::Char('x') | KeyCode::Delete => state.delete_highlighted(),
        KeyCode::Tab | KeyCode::Char('i') => state.panel.focus_input(),
        KeyCode::Esc | KeyCode::Char('q') => state.close_panel(),
        _ => {}
    }
}
