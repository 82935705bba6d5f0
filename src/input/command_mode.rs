use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::calendar::parse_iso_date;
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    Today,
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "today" => Command::Today,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Some(date) = parse_iso_date(parts[1]) {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Handles a key while the command line is active. Returns true when the
/// application should exit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Enter => {
            let cmd = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            execute(cmd, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn execute(cmd: Command, state: &mut AppState) -> bool {
    match cmd {
        Command::Quit => return true,
        Command::Goto(date) => state.select_date(date),
        Command::Today => state.jump_to_today(),
        Command::NewEvent(title) => {
            state.open_panel();
            if let Some(title) = title {
                state.panel.set_input(&title);
            }
        }
        Command::Theme(name) => state.theme = Theme::get_by_name(&name),
        Command::Help => state.show_help = !state.show_help,
        Command::Error(message) => tracing::warn!("{}", message),
    }
    false
}
