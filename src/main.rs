//! shiftlog: log work shifts by task from the terminal and export them to CSV.

mod app;
mod config;
mod error;
mod export;
mod format;
mod state;
mod storage;
mod ui;

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;

const DEFAULT_LOG_FILTER: &str = "shiftlog=info";

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Log to a daily file; the terminal belongs to the UI.
fn init_tracing() -> Option<WorkerGuard> {
    let dir = storage::log_dir()?;
    let appender = tracing_appender::rolling::daily(dir, "shiftlog.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let _log_guard = init_tracing();

    let config = Config::load();
    let mut app = App::new(&config);
    info!(export_dir = %app.exporter.dir().display(), "Starting shiftlog");

    let mut guard = TerminalGuard::new()?;
    let result = app.run(&mut guard.terminal).await;
    drop(guard);

    match &result {
        Ok(()) => info!(segments = app.tracker.shifts().len(), "Exiting"),
        Err(e) => error!(error = %e, "Event loop failed"),
    }
    result
}
