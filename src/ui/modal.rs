// Modal UI components.
// Task selection dialog drawn over the main view.

use ratatui::{prelude::*, widgets::*};

use crate::state::{Task, TaskSelector};

/// Draw the task selection modal on top of the current view.
pub fn draw_task_modal(frame: &mut Frame, selector: &mut TaskSelector) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 34.min(area.width);
    let modal_height = 11.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Task list
            Constraint::Length(1), // Instructions
        ])
        .split(modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Select Task ");

    let items: Vec<ListItem> = Task::ALL
        .iter()
        .enumerate()
        .map(|(i, task)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(task.label(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, chunks[0], &mut selector.list_state);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(instructions_widget, chunks[1]);
}
