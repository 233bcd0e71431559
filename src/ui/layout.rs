//! Page layout (heading, form area, help bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Heading shown above the form
pub const HEADING: &str = "Welcome to ThinkAlike UI!";

/// Split the page into heading, form, and help bar areas
pub fn create_layout(area: Rect, show_help_bar: bool) -> (Rect, Rect, Rect) {
    let help_height = if show_help_bar { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Heading
            Constraint::Min(0),              // Form
            Constraint::Length(help_height), // Help bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page heading
pub fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, area);
}

/// Draw the key-hint bar
pub fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": previous  "),
        Span::styled("Ctrl+U", Style::default().fg(Color::Cyan)),
        Span::raw(": clear  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_heading_and_help_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let (heading, form, help) = create_layout(area, true);

        assert_eq!(heading.height, 1);
        assert_eq!(help.height, 1);
        assert_eq!(form.height, 22);
        assert!(heading.y < form.y);
        assert!(form.y < help.y);
    }

    #[test]
    fn test_layout_without_help_bar() {
        let area = Rect::new(0, 0, 80, 24);
        let (heading, form, help) = create_layout(area, false);

        assert_eq!(heading.height, 1);
        assert_eq!(help.height, 0);
        assert_eq!(form.height, 23);
    }
}
