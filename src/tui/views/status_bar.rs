//! Status bar view
//!
//! Shows the last status or error message, then key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const KEY_HINTS: &str =
    "Tab:Next field  Enter:Add  Ctrl+D:Delete  Ctrl+L:Switch list  Esc:Quit";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        let color = if app.status_is_error {
            Color::Red
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(color),
        ));
        spans.push(Span::raw("│ "));
    }

    spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
