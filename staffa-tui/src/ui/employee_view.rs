use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use staffa_client::domain::EmployeeStatus;

use crate::app::App;

use super::widgets;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_search_bar(frame, chunks[0], app);
    render_filter_line(frame, chunks[1], app);

    let visible = app.visible_employees();
    if widgets::render_collection_placeholder(
        frame,
        chunks[2],
        &app.employees,
        visible.len(),
        "No employees match the current filters",
    ) {
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<24}", e.full_name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<30}", e.email)),
                Span::raw(format!("{:<18}", e.department)),
                Span::raw(format!("{:<24}", e.position)),
                Span::styled(e.status.label(), status_style(e.status)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Employees"))
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(app.employee_index));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, border) = if app.search_active {
        (
            format!("{}\u{2588}", app.employee_search),
            Style::default().fg(Color::Yellow),
        )
    } else if app.employee_search.is_empty() {
        ("/ to search".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (app.employee_search.clone(), Style::default())
    };

    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search"),
        ),
        area,
    );
}

fn render_filter_line(frame: &mut Frame, area: Rect, app: &App) {
    let status = app
        .employee_status_filter
        .selected
        .map(|s| s.label())
        .unwrap_or("All");
    let department = app
        .employee_department_filter
        .selected
        .as_deref()
        .unwrap_or("All");

    let line = Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::raw(status),
        Span::styled("  Department: ", Style::default().fg(Color::DarkGray)),
        Span::raw(department),
        Span::styled(
            "   s: status  d: dept  n: new  e: edit  o: onboarding",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn status_style(status: EmployeeStatus) -> Style {
    match status {
        EmployeeStatus::Active => Style::default().fg(Color::Green),
        EmployeeStatus::OnLeave => Style::default().fg(Color::Yellow),
        EmployeeStatus::Terminated => Style::default().fg(Color::Red),
    }
}
