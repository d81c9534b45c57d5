// Timer header: the running segment's elapsed time and task.

use ratatui::{prelude::*, widgets::*};

use crate::format::{ClockFormat, format_clock, format_elapsed};
use crate::state::{Clock, Phase, ShiftTracker};

/// Draw the elapsed-time readout for the current segment.
pub fn draw_timer<C: Clock>(
    frame: &mut Frame,
    tracker: &ShiftTracker<C>,
    clock_format: ClockFormat,
    area: Rect,
) {
    let phase = tracker.phase();

    let (state_label, state_color) = match phase {
        Phase::Idle => ("IDLE", Color::DarkGray),
        Phase::AwaitingTask => ("CHOOSE TASK", Color::Yellow),
        Phase::Running => ("RUNNING", Color::Green),
    };

    let elapsed_style = if tracker.is_timing() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut task_line = vec![Span::styled(
        format!("[{}]", state_label),
        Style::default().fg(state_color),
    )];
    if let Some(task) = tracker.selected_task() {
        task_line.push(Span::raw("  "));
        task_line.push(Span::styled(
            task.label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(start) = tracker.active_start() {
        task_line.push(Span::styled(
            format!("  since {}", format_clock(&start, clock_format)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(format_elapsed(tracker.elapsed_seconds()), elapsed_style)),
        Line::from(task_line),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" shiftlog ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(widget, area);
}
