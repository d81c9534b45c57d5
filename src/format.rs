// Display formatting for elapsed durations and wall-clock times.
// Shared by the timer view, the shift table, and the CSV export.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// How start/end timestamps are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    fn pattern(self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%I:%M %p",
            ClockFormat::TwentyFourHour => "%H:%M",
        }
    }
}

/// Format a number of seconds as `HH:MM:SS`.
///
/// Each component is padded to two digits. Hours are not capped, so a
/// duration of 100 hours or more simply renders wider than eight characters.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a wall-clock timestamp as hour:minute.
pub fn format_clock(dt: &DateTime<Local>, format: ClockFormat) -> String {
    dt.format(format.pattern()).to_string()
}

/// Calendar date used in export file names (`YYYY-MM-DD`).
pub fn format_date(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
