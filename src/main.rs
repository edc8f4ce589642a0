//! Hangman - guess the word one letter at a time
//!
//! Six wrong guesses and it's over. Lifetime stats survive between runs.

mod app;
mod config;
mod game;
mod stats;
mod storage;
mod tui;

use app::App;
use config::{Config, LOG_ENV};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use game::WordList;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tui::Tui;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const LOG_FILE_NAME: &str = "hangman.log";

fn main() -> io::Result<()> {
    let config = Config::from_env();
    let data_dir = resolve_data_dir(&config);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = setup_logging(&data_dir);

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(data_dir = %data_dir.display(), backend = ?config.stats_backend, "starting");

    let storage = storage::open(&config, data_dir);
    let mut app = App::new(
        Box::new(WordList::default()),
        storage,
        Box::new(rand::rng()),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let result = run(&mut terminal, &mut app);

    // Terminal cleanup also happens via Tui::drop
    terminal.exit()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal error");
    }
    tracing::info!(
        games_played = app.tracker().games_played(),
        "Thanks for playing Hangman!"
    );

    result
}

/// Main event loop
fn run(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| tui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => app.on_escape(),
                        KeyCode::Enter => app.on_submit(),
                        KeyCode::Backspace => app.on_backspace(),
                        KeyCode::Char(c) if !c.is_control() => app.on_char(c),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Configured data directory, else the OS default, else the working directory.
fn resolve_data_dir(config: &Config) -> PathBuf {
    config
        .data_dir
        .clone()
        .or_else(|| storage::default_data_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Log to `hangman.log` in the data directory; the terminal belongs to the UI.
///
/// Logging is best effort: if the log file can't be opened the game runs
/// without one.
fn setup_logging(data_dir: &Path) -> Option<WorkerGuard> {
    let file_appender = log_file_appender(data_dir)?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", data_dir.join(LOG_FILE_NAME).display());

    Some(guard)
}

/// Open the non-rotating log file, or `None` if the directory or file is unusable.
fn log_file_appender(data_dir: &Path) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(data_dir).ok()?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(data_dir)
        .ok()
}
