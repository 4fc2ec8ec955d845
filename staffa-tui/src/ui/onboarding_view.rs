use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use staffa_client::domain::TaskStatus;

use crate::app::App;

use super::widgets;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let employee = match &app.onboarding_employee {
        Some(employee) => employee,
        None => {
            frame.render_widget(
                Paragraph::new("Open an employee with o from the Employees view")
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }
    };

    let filter = app
        .task_status_filter
        .selected
        .map(|s| s.label())
        .unwrap_or("All");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Onboarding: {}", employee.full_name()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Filter: {}   Enter: advance  f: filter  n: new  b: back", filter),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[0],
    );

    let visible = app.visible_tasks();
    if widgets::render_collection_placeholder(
        frame,
        chunks[1],
        &app.onboarding_tasks,
        visible.len(),
        "No onboarding tasks",
    ) {
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|t| {
            let due = t
                .due_date
                .map(|d| format!("due {}", d))
                .unwrap_or_default();
            let docs = if t.documents_required { "[docs]" } else { "" };
            let mut name_style = Style::default();
            if t.status == TaskStatus::Completed {
                name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", t.status.label()), status_style(t.status)),
                Span::styled(format!("{:<32}", t.name), name_style),
                Span::raw(format!("{:<20}", t.category.as_deref().unwrap_or(""))),
                Span::raw(format!("{:<16}", due)),
                Span::styled(docs, Style::default().fg(Color::Magenta)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(app.task_index));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Pending => Style::default().fg(Color::DarkGray),
        TaskStatus::InProgress => Style::default().fg(Color::Yellow),
        TaskStatus::Completed => Style::default().fg(Color::Green),
    }
}
