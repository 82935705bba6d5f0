use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calpad::app::{AppState, Mode, SaveStatus};
use crate::tui::{calendar_views, dialogs};

/// Draws one frame and returns the area the month grid occupied.
pub fn ui(f: &mut Frame, app: &AppState) -> Rect {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[1]);

    let mode_label = if matches!(app.mode, Mode::Command) {
        "Command"
    } else if app.panel.is_open() {
        "Panel"
    } else {
        "Normal"
    };
    let title = Paragraph::new(format!("calpad - {} Mode", mode_label))
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    calendar_views::month::render(f, app, content_chunks[0]);

    if app.panel.is_open() {
        dialogs::day_panel::render(f, app, content_chunks[1]);
    } else {
        calendar_views::day_list::render(f, app, content_chunks[1]);
    }

    let (status_text, status_color) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.clone(), app.theme.text)
    } else {
        let (save_text, color) = match &app.save_status {
            SaveStatus::Idle => (String::new(), app.theme.text),
            SaveStatus::Saved => (" | Saved".to_string(), app.theme.text),
            SaveStatus::Error(message) => (format!(" | {}", message), app.theme.error),
        };
        (
            format!("Events: {}{} | Press 'q' to quit, '?' for help", app.store.len(), save_text),
            color,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    content_chunks[0]
}
