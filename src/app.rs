// App state and main event loop.
// Routes keyboard input to the shift tracker and the task prompt, and drives the ticker.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::export::{Exporter, share};
use crate::format::ClockFormat;
use crate::state::{Clock, ShiftTracker, StatusMessage, SystemClock, Task, Ticker};
use crate::ui;

/// What woke the event loop.
enum LoopEvent {
    Input(Option<io::Result<Event>>),
    Tick,
}

/// Main application state.
pub struct App<C: Clock = SystemClock> {
    /// Timer state machine and shift log.
    pub tracker: ShiftTracker<C>,
    pub exporter: Exporter,
    pub clock_format: ClockFormat,
    /// Most recent message for the status line.
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: &Config) -> Self {
        let tracker = ShiftTracker::with_clock(SystemClock, Ticker::new(config.tick_period()));
        let exporter = Exporter::new(
            config.export_dir.clone(),
            config.clock_format,
            share::for_mode(config.share),
        );
        Self::with_parts(tracker, exporter, config.clock_format)
    }
}

impl<C: Clock> App<C> {
    pub fn with_parts(
        tracker: ShiftTracker<C>,
        exporter: Exporter,
        clock_format: ClockFormat,
    ) -> Self {
        Self {
            tracker,
            exporter,
            clock_format,
            status: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let event = tokio::select! {
                maybe_event = events.next() => LoopEvent::Input(maybe_event),
                _ = self.tracker.next_tick() => LoopEvent::Tick,
            };

            match event {
                LoopEvent::Tick => self.tracker.tick(),
                LoopEvent::Input(Some(Ok(Event::Key(key)))) => self.handle_key(key),
                LoopEvent::Input(Some(Ok(_))) => {}
                LoopEvent::Input(Some(Err(e))) => return Err(e),
                LoopEvent::Input(None) => self.should_quit = true,
            }
        }
        Ok(())
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.tracker.selector.is_visible() {
            self.handle_task_prompt_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('s') | KeyCode::Enter => {
                let _ = self.apply(|t| t.request_start());
            }
            KeyCode::Char('e') => {
                let _ = self.apply(|t| t.end_segment_and_continue());
            }
            KeyCode::Char('x') => {
                if self.apply(|t| t.end_shift()) {
                    self.status = Some(StatusMessage::info("Shift ended"));
                }
            }
            KeyCode::Char('c') => self.export(),
            _ => {}
        }
    }

    fn handle_task_prompt_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.tracker.selector.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.tracker.selector.select_next(),
            KeyCode::Enter => {
                if let Some(task) = self.tracker.selector.highlighted() {
                    self.confirm(task);
                }
            }
            KeyCode::Char(c) => {
                if let Some(task) = c.to_digit(10).and_then(Task::from_shortcut) {
                    self.confirm(task);
                }
            }
            KeyCode::Esc => {
                let _ = self.apply(|t| t.dismiss_task_selection());
            }
            _ => {}
        }
    }

    fn confirm(&mut self, task: Task) {
        if self.apply(|t| t.confirm_task(task)) {
            self.status = Some(StatusMessage::info(format!("Timing {}", task)));
        }
    }

    /// Run a tracker transition. Rejected transitions are no-ops.
    fn apply(&mut self, f: impl FnOnce(&mut ShiftTracker<C>) -> Result<()>) -> bool {
        match f(&mut self.tracker) {
            Ok(()) => true,
            Err(e) if e.is_invalid_transition() => {
                debug!(error = %e, "Ignored key");
                false
            }
            Err(e) => {
                warn!(error = %e, "Transition failed");
                self.status = Some(StatusMessage::error(e.to_string()));
                false
            }
        }
    }

    /// Export the shift log and report the outcome on the status line.
    pub fn export(&mut self) {
        let now = self.tracker.clock().now();
        match self.exporter.export(self.tracker.shifts(), &now) {
            Ok(path) if self.tracker.shifts().is_empty() => {
                self.status = Some(StatusMessage::warn(format!(
                    "No shifts logged yet, wrote header only to {}",
                    path.display()
                )));
            }
            Ok(path) => {
                info!(path = %path.display(), "Export complete");
                self.status = Some(StatusMessage::info(format!(
                    "Exported {} row(s) to {}",
                    self.tracker.shifts().len(),
                    path.display()
                )));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("Export failed: {}", e)));
            }
        }
    }
}
