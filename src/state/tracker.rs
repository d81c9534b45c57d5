// Shift tracker: the timer state machine and the completed shift log.
// All transitions run on the UI loop; the ticker only exists while a segment clock runs.

use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{Result, ShiftError};
use crate::format::{ClockFormat, format_clock, format_elapsed};

use super::clock::{Clock, SystemClock};
use super::task::{Task, TaskSelector};
use super::ticker::Ticker;

/// Where the tracker is in the shift workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No segment clock and no prompt.
    Idle,
    /// Task prompt is open.
    AwaitingTask,
    /// A segment is being timed under a confirmed task.
    Running,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::AwaitingTask => "awaiting a task",
            Phase::Running => "running",
        };
        f.write_str(name)
    }
}

/// A completed segment of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Whole seconds between `start` and `end`, floored.
    pub duration_secs: u64,
    pub task: Task,
}

impl ShiftRecord {
    fn close(start: DateTime<Local>, end: DateTime<Local>, task: Task) -> Self {
        let elapsed = end.signed_duration_since(start).num_seconds();
        let duration_secs = u64::try_from(elapsed).unwrap_or(0);
        Self {
            start,
            end,
            duration_secs,
            task,
        }
    }

    pub fn start_display(&self, format: ClockFormat) -> String {
        format_clock(&self.start, format)
    }

    pub fn end_display(&self, format: ClockFormat) -> String {
        format_clock(&self.end, format)
    }

    pub fn duration_display(&self) -> String {
        format_elapsed(self.duration_secs)
    }
}

/// Session state for one run of the application.
#[derive(Debug)]
pub struct ShiftTracker<C: Clock = SystemClock> {
    clock: C,
    shifts: Vec<ShiftRecord>,
    active_start: Option<DateTime<Local>>,
    elapsed_seconds: u64,
    selected_task: Option<Task>,
    pub selector: TaskSelector,
    ticker: Ticker,
}

impl Default for ShiftTracker<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock, Ticker::default())
    }
}

impl<C: Clock> ShiftTracker<C> {
    pub fn with_clock(clock: C, ticker: Ticker) -> Self {
        Self {
            clock,
            shifts: Vec::new(),
            active_start: None,
            elapsed_seconds: 0,
            selected_task: None,
            selector: TaskSelector::new(),
            ticker,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        if self.selector.is_visible() {
            Phase::AwaitingTask
        } else if self.active_start.is_some() {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn selected_task(&self) -> Option<Task> {
        self.selected_task
    }

    pub fn active_start(&self) -> Option<DateTime<Local>> {
        self.active_start
    }

    /// Whether a segment clock is running, regardless of the prompt.
    pub fn is_timing(&self) -> bool {
        self.active_start.is_some()
    }

    /// Sum of all logged segment durations.
    pub fn total_logged_seconds(&self) -> u64 {
        self.shifts.iter().map(|s| s.duration_secs).sum()
    }

    fn reject(&self, action: &'static str) -> ShiftError {
        let phase = self.phase();
        debug!(action, %phase, "Rejected transition");
        ShiftError::InvalidTransition { action, phase }
    }

    /// Open the task prompt. The clock does not start until a task is confirmed.
    pub fn request_start(&mut self) -> Result<()> {
        if self.phase() != Phase::Idle {
            return Err(self.reject("start a shift"));
        }
        self.selector.open();
        debug!("Task selection opened");
        Ok(())
    }

    /// Begin timing a segment under `task`.
    pub fn confirm_task(&mut self, task: Task) -> Result<()> {
        if self.phase() != Phase::AwaitingTask {
            return Err(self.reject("confirm a task"));
        }
        let now = self.clock.now();
        self.selected_task = Some(task);
        self.active_start = Some(now);
        self.elapsed_seconds = 0;
        self.selector.close();
        self.ticker.start();
        info!(%task, start = %now.format("%H:%M:%S"), "Segment started");
        Ok(())
    }

    /// Close the prompt without choosing.
    ///
    /// No record is closed. If a segment clock was already running (after
    /// [`end_segment_and_continue`](Self::end_segment_and_continue)) it keeps
    /// running under the previous task.
    pub fn dismiss_task_selection(&mut self) -> Result<()> {
        if self.phase() != Phase::AwaitingTask {
            return Err(self.reject("dismiss task selection"));
        }
        self.selector.close();
        debug!(phase = %self.phase(), "Task selection dismissed");
        Ok(())
    }

    /// Count one second of the running segment.
    pub fn tick(&mut self) {
        debug_assert_eq!(self.active_start.is_some(), self.ticker.is_active());
        if self.active_start.is_some() {
            self.elapsed_seconds += 1;
        }
    }

    /// Wait for the next tick of the segment clock. Pending forever while idle.
    pub async fn next_tick(&mut self) {
        self.ticker.wait().await;
    }

    fn close_segment(&mut self, action: &'static str) -> Result<DateTime<Local>> {
        let (Some(start), Some(task)) = (self.active_start, self.selected_task) else {
            return Err(self.reject(action));
        };
        let now = self.clock.now();
        let record = ShiftRecord::close(start, now, task);
        info!(
            %task,
            duration = %record.duration_display(),
            "Segment logged"
        );
        self.shifts.push(record);
        Ok(now)
    }

    /// Log the running segment and immediately start the next one.
    ///
    /// The new segment's clock starts now and the task prompt reopens; the
    /// previous task label stays selected until the operator picks again.
    pub fn end_segment_and_continue(&mut self) -> Result<()> {
        if self.phase() != Phase::Running {
            return Err(self.reject("end the timer"));
        }
        let now = self.close_segment("end the timer")?;
        self.active_start = Some(now);
        self.elapsed_seconds = 0;
        self.ticker.start();
        self.selector.open();
        Ok(())
    }

    /// Log the running segment and return to idle.
    pub fn end_shift(&mut self) -> Result<()> {
        if !self.is_timing() {
            return Err(self.reject("end the shift"));
        }
        self.close_segment("end the shift")?;
        self.active_start = None;
        self.elapsed_seconds = 0;
        self.selected_task = None;
        self.selector.close();
        self.ticker.stop();
        info!(segments = self.shifts.len(), "Shift ended");
        Ok(())
    }
}
