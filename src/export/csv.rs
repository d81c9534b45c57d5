// CSV serialization of the shift log.
// One header row, then one row per record with its display strings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShiftError};
use crate::format::ClockFormat;
use crate::state::ShiftRecord;

/// Column names, in record attribute order.
pub const HEADER: [&str; 4] = ["startTime", "endTime", "duration", "task"];

/// A record as it appears in the exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvRow {
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub task: String,
}

impl CsvRow {
    pub fn from_record(record: &ShiftRecord, format: ClockFormat) -> Self {
        Self {
            start_time: record.start_display(format),
            end_time: record.end_display(format),
            duration: record.duration_display(),
            task: record.task.label().to_string(),
        }
    }
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new())
}

/// Serialize shifts to CSV text.
///
/// The header is always written, so an empty session exports a header-only file.
/// Fields containing delimiters, quotes, or newlines are quoted by the writer.
pub fn to_csv(shifts: &[ShiftRecord], format: ClockFormat) -> Result<String> {
    let mut writer = writer();
    writer.write_record(HEADER)?;
    for record in shifts {
        writer.serialize(CsvRow::from_record(record, format))?;
    }

    let bytes = writer.into_inner().map_err(|e| ShiftError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ShiftError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, TimeZone};

    use super::*;
    use crate::state::Task;

    fn record(h: u32, m: u32, secs: i64, task: Task) -> ShiftRecord {
        let start = Local.with_ymd_and_hms(2026, 10, 15, h, m, 0).unwrap();
        ShiftRecord {
            start,
            end: start + Duration::seconds(secs),
            duration_secs: secs as u64,
            task,
        }
    }

    #[test]
    fn test_header_only_for_empty_session() {
        let text = to_csv(&[], ClockFormat::TwelveHour).unwrap();
        assert_eq!(text, "startTime,endTime,duration,task\r\n");
    }

    #[test]
    fn test_rows_use_display_strings() {
        let shifts = vec![
            record(9, 0, 1800, Task::Clinical),
            record(13, 15, 120, Task::NonBillable),
        ];
        let text = to_csv(&shifts, ClockFormat::TwelveHour).unwrap();

        assert_eq!(
            text,
            "startTime,endTime,duration,task\r\n\
             09:00 AM,09:30 AM,00:30:00,Clinical\r\n\
             01:15 PM,01:17 PM,00:02:00,Non-Billable\r\n"
        );
    }

    #[test]
    fn test_rows_parse_back_in_order() {
        let shifts = vec![
            record(8, 0, 3661, Task::Education),
            record(9, 1, 59, Task::Break),
            record(9, 2, 600, Task::Billable),
        ];
        let text = to_csv(&shifts, ClockFormat::TwentyFourHour).unwrap();

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let parsed: Vec<CsvRow> = reader.deserialize().map(|row| row.unwrap()).collect();
        let expected: Vec<CsvRow> = shifts
            .iter()
            .map(|r| CsvRow::from_record(r, ClockFormat::TwentyFourHour))
            .collect();
        assert_eq!(parsed, expected);
        assert_eq!(parsed[0].duration, "01:01:01");
        assert_eq!(parsed[1].start_time, "09:01");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut writer = writer();
        writer
            .serialize(CsvRow {
                start_time: "09:00".into(),
                end_time: "10:00".into(),
                duration: "01:00:00".into(),
                task: "Rounds, ward 3".into(),
            })
            .unwrap();
        let bytes = writer.into_inner().map_err(|e| e.into_error()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "09:00,10:00,01:00:00,\"Rounds, ward 3\"\r\n");
    }
}
