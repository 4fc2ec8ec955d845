use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

mod dashboard_view;
mod employee_view;
mod form_modal;
mod onboarding_view;
mod pto_view;
pub(crate) mod widgets;
mod workflow_view;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, root[0], app);

    match app.current_view {
        View::Employees => employee_view::render(frame, app, root[1]),
        View::Onboarding => onboarding_view::render(frame, app, root[1]),
        View::Pto => pto_view::render(frame, app, root[1]),
        View::Workflows => workflow_view::render(frame, app, root[1]),
        View::Dashboard => dashboard_view::render(frame, app, root[1]),
    }

    render_status_line(frame, root[2], app);

    // Modals draw on top of whatever view is behind them.
    form_modal::render_open_modal(frame, app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let tabs = [
        (View::Employees, "1 Employees"),
        (View::Onboarding, "2 Onboarding"),
        (View::Pto, "3 PTO"),
        (View::Workflows, "4 Workflows"),
        (View::Dashboard, "5 Dashboard"),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (view, label) in tabs {
        let style = if app.current_view == view {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            "q: quit  1-5: views  r: reload",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(text), area);
}
