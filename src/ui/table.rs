// Shift log table.
// One row per completed segment, newest at the bottom, with an empty state.

use ratatui::{prelude::*, widgets::*};

use crate::format::{ClockFormat, format_elapsed};
use crate::state::{Clock, ShiftTracker};

/// Render an empty state message.
fn render_empty(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Render the logged shifts.
pub fn draw_shift_table<C: Clock>(
    frame: &mut Frame,
    tracker: &ShiftTracker<C>,
    clock_format: ClockFormat,
    area: Rect,
) {
    let shifts = tracker.shifts();
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Shifts ({}) · {} ",
        shifts.len(),
        format_elapsed(tracker.total_logged_seconds())
    ));

    if shifts.is_empty() {
        render_empty(frame, area, block, "No shifts logged yet");
        return;
    }

    let header = Row::new(["Start Time", "End Time", "Duration", "Task"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = shifts
        .iter()
        .map(|shift| {
            Row::new(vec![
                Cell::from(shift.start_display(clock_format)),
                Cell::from(shift.end_display(clock_format)),
                Cell::from(shift.duration_display()),
                Cell::from(Span::styled(shift.task.label(), Style::default().fg(Color::Cyan))),
            ])
        })
        .collect();

    // Keep the newest rows visible once the log outgrows the area
    let visible = usize::from(area.height.saturating_sub(3));
    let skip = rows.len().saturating_sub(visible);

    let table = Table::new(
        rows.into_iter().skip(skip),
        [Constraint::Percentage(25); 4],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
