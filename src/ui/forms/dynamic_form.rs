//! Whole-form rendering driven by schema order

use super::field_renderer::draw_field;
use crate::state::{DynamicForm, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line bordered input (borders + content)
const FIELD_HEIGHT: u16 = 3;

/// Draw the form: one bordered input per field, in schema order, inside a
/// block titled with the form title
pub fn draw_dynamic_form(frame: &mut Frame, area: Rect, form: &DynamicForm) {
    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[idx], field, idx == form.active_field());
    }
}
