// Export module.
// Serializes the shift log to CSV, writes it under a dated file name, and shares it.

pub mod csv;
pub mod share;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::error::Result;
use crate::format::{ClockFormat, format_date};
use crate::state::ShiftRecord;
use crate::storage;

pub use self::csv::to_csv;
pub use share::Share;

/// File name for an export made at `now`, e.g. `shifts_2026-10-15.csv`.
pub fn export_file_name(now: &DateTime<Local>) -> String {
    format!("shifts_{}.csv", format_date(now))
}

/// Writes shift logs to disk and hands them to a share collaborator.
pub struct Exporter {
    dir: PathBuf,
    clock_format: ClockFormat,
    share: Box<dyn Share>,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>, clock_format: ClockFormat, share: Box<dyn Share>) -> Self {
        Self {
            dir: dir.into(),
            clock_format,
            share,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export `shifts` and return the written path.
    ///
    /// Read-only over the session; a write or share failure is returned as is.
    pub fn export(&self, shifts: &[ShiftRecord], now: &DateTime<Local>) -> Result<PathBuf> {
        let text = to_csv(shifts, self.clock_format)?;
        let path = self.dir.join(export_file_name(now));

        storage::write_text(&path, &text)?;
        info!(path = %path.display(), rows = shifts.len(), "Wrote export");

        if let Err(e) = self.share.share(&path) {
            error!(error = %e, "Share failed");
            return Err(e);
        }
        Ok(path)
    }
}
