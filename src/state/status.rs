// Operator-facing status line.
// Holds the most recent info/warning/error message shown under the shift table.

use chrono::{DateTime, Local};

/// Status message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

/// A message for the status line.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }

    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}
