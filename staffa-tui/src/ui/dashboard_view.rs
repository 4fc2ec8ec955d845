use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub(super) fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.dashboard.auth_error {
        frame.render_widget(
            Paragraph::new(message.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red)),
            area,
        );
        return;
    }

    // No stats yet means the initial load is still in flight.
    let Some(stats) = app.dashboard.stats else {
        frame.render_widget(
            Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    render_stat(frame, columns[0], "Pending timesheets", stats.pending_timesheets);
    render_stat(frame, columns[1], "Direct reports", stats.direct_reports);
    render_stat(frame, columns[2], "Active projects", stats.projects);

    let scope = match &app.dashboard.scoped {
        Some((manager, count)) => Line::from(vec![
            Span::styled("Scope: ", Style::default().fg(Color::DarkGray)),
            Span::styled(manager.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {} direct report(s)", count)),
            Span::styled("   m: next manager", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(
            "Scope: my team   m: view another manager's team",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(scope), chunks[1]);
}

fn render_stat(frame: &mut Frame, area: Rect, title: &str, value: usize) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
