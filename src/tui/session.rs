use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal,
};
use calpad::{
    app::{AppState, Mode},
    input::{command_mode, normal_mode, panel_mode},
};
use crate::tui::{calendar_views::month, presentation::ui};

pub fn run_tui(mut app: AppState) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI loop failed: {}", err);
    }
    tracing::info!("calpad exiting with {} events", app.store.len());

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    let mut grid_area = Rect::default();

    loop {
        terminal.draw(|f| grid_area = ui(f, app))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(key.code, app) {
                    return Ok(());
                }
            }
            TermEvent::Mouse(mouse) => handle_mouse(mouse, app, grid_area),
            _ => {}
        }
    }
}

/// Routes a key press to whichever surface owns input. Returns true on quit.
fn handle_key(code: KeyCode, app: &mut AppState) -> bool {
    if app.show_help {
        handle_help_keys(code, app);
        return false;
    }

    match app.mode {
        Mode::Command => command_mode::handle_key(code, app),
        Mode::Normal if app.panel.is_open() => {
            panel_mode::handle_key(code, app);
            false
        }
        Mode::Normal => normal_mode::handle_key(code, app),
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut AppState, grid_area: Rect) {
    if app.show_help || app.mode == Mode::Command {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
        && let Some(date) = month::date_at(app, grid_area, mouse.column, mouse.row)
    {
        tracing::debug!("Clicked {}", date);
        app.open_panel_on(date);
    }
}
