use anyhow::Context;
use tracing_subscriber::EnvFilter;

use calpad::{
    app::AppState,
    storage::{self, config::Config, EventStore, MemoryStore},
    ui::theme::Theme,
};

mod cli;
use cli::{CliMode, USAGE, format_agenda_text, parse_cli_mode};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{USAGE}");
            return Ok(());
        }
    };

    if cli_mode == CliMode::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = Config::load_or_create()
        .with_context(|| format!("loading {}", Config::config_path().display()))?;

    let store = if cli_mode.uses_memory_store() {
        EventStore::load(Box::new(MemoryStore::new()))
    } else {
        let backend = storage::open_backend(&config.storage)
            .with_context(|| format!("opening event store at {}", config.storage.path.display()))?;
        EventStore::load(backend)
    };

    if let CliMode::Agenda { date, .. } = cli_mode {
        println!("{}", format_agenda_text(date, &store));
        return Ok(());
    }

    let app = AppState::new(store)
        .with_theme(Theme::get_by_name(&config.ui.theme))
        .with_week_start(config.ui.week_start);

    run_tui(app).context("running terminal UI")
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calpad.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calpad started");
}
