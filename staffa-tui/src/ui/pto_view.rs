use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use staffa_client::domain::PtoStatus;

use crate::app::App;

use super::widgets;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_balance(frame, chunks[0], app);

    let requests = app.pto_requests.items();
    if widgets::render_collection_placeholder(
        frame,
        chunks[1],
        &app.pto_requests,
        requests.len(),
        "No PTO requests yet (n to create one)",
    ) {
        return;
    }

    let items: Vec<ListItem> = requests
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} .. {}  ", r.start_date, r.end_date)),
                Span::raw(format!("{:<10}", r.pto_type.label())),
                Span::raw(format!("{:>5} day(s)  ", r.days_requested)),
                Span::styled(format!("{:<10}", r.status.label()), status_style(r.status)),
                Span::styled(r.reason.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("My requests"))
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(app.pto_index));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_balance(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.pto_balance {
        Some(balance) => Line::from(vec![
            Span::raw(format!("{} balance   ", balance.year)),
            Span::styled("Vacation: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}   ", balance.vacation_days)),
            Span::styled("Sick: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}   ", balance.sick_days)),
            Span::styled("Personal: ", Style::default().fg(Color::DarkGray)),
            Span::raw(balance.personal_days.to_string()),
        ]),
        // The request form still works; the balance check is skipped.
        None => Line::from(Span::styled(
            "Balance unavailable",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Balance")),
        area,
    );
}

fn status_style(status: PtoStatus) -> Style {
    match status {
        PtoStatus::Pending => Style::default().fg(Color::Yellow),
        PtoStatus::Approved => Style::default().fg(Color::Green),
        PtoStatus::Denied => Style::default().fg(Color::Red),
        PtoStatus::Cancelled => Style::default().fg(Color::DarkGray),
    }
}
