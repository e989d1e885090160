//! Budget header view
//!
//! Shows the period title, the available amount, and the income and
//! expense totals with the expense share of income.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the budget header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let summary = &app.summary;

    let lines = vec![
        Line::from(Span::styled(
            format!("Available Budget in {}", app.title),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            summary.available_label(symbol),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Income   ", Style::default().fg(Color::Cyan)),
            Span::styled(summary.income_label(symbol), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Expenses ", Style::default().fg(Color::Cyan)),
            Span::styled(summary.expense_label(symbol), Style::default().fg(Color::Red)),
            Span::raw("  "),
            Span::styled(
                summary.expense_percentage.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
