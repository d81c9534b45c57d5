// UI module for rendering the TUI.
// Contains the timer header, the shift log table, the task modal, and the status bar.

mod modal;
mod table;
mod timer;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{Clock, Phase, StatusLevel};

/// Main draw function that renders the entire UI.
pub fn draw<C: Clock>(frame: &mut Frame, app: &mut App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Timer
            Constraint::Min(3),    // Shift log
            Constraint::Length(1), // Status message
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    timer::draw_timer(frame, &app.tracker, app.clock_format, chunks[0]);
    table::draw_shift_table(frame, &app.tracker, app.clock_format, chunks[1]);
    draw_status_line(frame, app, chunks[2]);
    draw_key_hints(frame, app.tracker.phase(), chunks[3]);

    if app.tracker.selector.is_visible() {
        modal::draw_task_modal(frame, &mut app.tracker.selector);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the most recent status message.
fn draw_status_line<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };

    let (icon, color) = match status.level {
        StatusLevel::Info => ("ℹ", Color::Green),
        StatusLevel::Warn => ("⚠", Color::Yellow),
        StatusLevel::Error => ("✗", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{} {}", icon, status.message), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw context-sensitive key hints.
fn draw_key_hints(frame: &mut Frame, phase: Phase, area: Rect) {
    let mut hints: Vec<(&str, &str)> = match phase {
        Phase::Idle => vec![("s", "Start Timer")],
        Phase::AwaitingTask => vec![("↑↓", "Choose"), ("Enter", "Select"), ("Esc", "Cancel")],
        Phase::Running => vec![("e", "End Timer"), ("x", "End Shift")],
    };
    if phase != Phase::AwaitingTask {
        hints.extend([("c", "Export CSV"), ("?", "Help"), ("q", "Quit")]);
    }

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {}", key), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 46.min(area.width);
    let popup_height = 16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let shortcut = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        shortcut("s or Enter", "Start timer (choose a task)"),
        shortcut("e", "End timer, start the next one"),
        shortcut("x", "End shift"),
        shortcut("c", "Export shifts to CSV"),
        shortcut("↑/↓ or j/k", "Move in task list"),
        shortcut("1-6", "Pick task directly"),
        shortcut("Esc", "Close task list / help"),
        shortcut("?", "Show/hide this help"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    use super::*;
    use crate::export::{Exporter, share};
    use crate::format::ClockFormat;
    use crate::state::clock::ManualClock;
    use crate::state::{ShiftTracker, Task, Ticker};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_timer_table_and_modal() {
        let temp_dir = TempDir::new().unwrap();
        let start = Local.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap();
        let tracker = ShiftTracker::with_clock(ManualClock::new(start), Ticker::default());
        let exporter = Exporter::new(
            temp_dir.path(),
            ClockFormat::TwelveHour,
            Box::new(share::NoShare),
        );
        let mut app = App::with_parts(tracker, exporter, ClockFormat::TwelveHour);

        app.tracker.request_start().unwrap();
        app.tracker.confirm_task(Task::Clinical).unwrap();
        app.tracker.clock().advance(1800);
        app.tracker.end_segment_and_continue().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("00:00:00"));
        assert!(text.contains("09:00 AM"));
        assert!(text.contains("09:30 AM"));
        assert!(text.contains("00:30:00"));
        assert!(text.contains("Select Task"));
        assert!(text.contains("Non-Billable"));
    }
}
