//! UI module for rendering the form page

mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (heading_area, form_area, help_area) = layout::create_layout(area, app.state.show_help_bar);

    layout::draw_heading(frame, heading_area);
    forms::draw_dynamic_form(frame, form_area, &app.state.form);

    if app.state.show_help_bar {
        layout::draw_help_bar(frame, help_area);
    }
}
