// Error types for shiftlog.
// Covers rejected state transitions, export failures, and configuration errors.

use thiserror::Error;

use crate::state::Phase;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to share {path}: {reason}")]
    Share { path: String, reason: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ShiftError {
    /// Whether this error is a rejected transition that leaves state untouched.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, ShiftError::InvalidTransition { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShiftError>;
