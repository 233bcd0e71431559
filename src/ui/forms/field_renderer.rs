//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a single form field as a bordered input
///
/// The label becomes the border title. While the field is empty its
/// placeholder is shown dimmed; password fields display their value masked.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let display_value = field.display_value();
    let line = if field.is_empty() {
        Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, cursor_style),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
