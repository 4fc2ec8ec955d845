use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use staffa_client::domain::WorkflowStatus;

use crate::app::App;

use super::widgets;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let filter = app
        .workflow_status_filter
        .selected
        .map(|s| s.label())
        .unwrap_or("All");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
            Span::raw(filter),
            Span::styled(
                "   f: filter (server-side)  n: start workflow",
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[0],
    );

    let workflows = app.workflows.items();
    if widgets::render_collection_placeholder(
        frame,
        chunks[1],
        &app.workflows,
        workflows.len(),
        "No workflows for this filter",
    ) {
        return;
    }

    let items: Vec<ListItem> = workflows
        .iter()
        .map(|w| {
            let expected = w
                .expected_completion
                .map(|d| format!("expected {}", d))
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", w.template)),
                Span::styled(
                    format!("{:<14}", w.status.label()),
                    status_style(w.status),
                ),
                Span::raw(format!("{:<24}", w.current_stage)),
                Span::raw(format!("{:>4.0}%  ", w.progress)),
                Span::styled(expected, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Workflows"))
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(app.workflow_index));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    if let Some(workflow) = workflows.get(app.workflow_index) {
        let ratio = (workflow.progress / 100.0).clamp(0.0, 1.0);
        frame.render_widget(
            Gauge::default()
                .block(Block::default().borders(Borders::ALL).title("Progress"))
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(ratio)
                .label(format!("{} ({:.0}%)", workflow.current_stage, workflow.progress)),
            chunks[2],
        );
    }
}

fn status_style(status: WorkflowStatus) -> Style {
    match status {
        WorkflowStatus::InProgress => Style::default().fg(Color::Yellow),
        WorkflowStatus::Completed => Style::default().fg(Color::Green),
        WorkflowStatus::Cancelled => Style::default().fg(Color::DarkGray),
    }
}
