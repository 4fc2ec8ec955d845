use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::collection::RemoteCollection;

/// Fixed-size rectangle centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the loading / failed / empty placeholder for a collection.
/// Returns true when a placeholder was drawn and the caller should skip
/// rendering rows. Loading, failure and "loaded but empty" are distinct
/// states, never inferred from the data shape.
pub fn render_collection_placeholder<T>(
    frame: &mut Frame,
    area: Rect,
    collection: &RemoteCollection<T>,
    visible_len: usize,
    empty_message: &str,
) -> bool {
    if collection.is_loading() {
        frame.render_widget(placeholder("Loading...", Color::DarkGray), area);
        return true;
    }
    if let Some(error) = collection.error() {
        frame.render_widget(placeholder(error, Color::Red), area);
        return true;
    }
    if visible_len == 0 {
        frame.render_widget(placeholder(empty_message, Color::DarkGray), area);
        return true;
    }
    false
}

fn placeholder(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
}
