//! Entry form view
//!
//! Type toggle on the first line, description and value inputs below.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controller::Field;
use crate::models::TransactionKind;
use crate::tui::app::App;

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Add ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Description
            Constraint::Length(1), // Value
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(kind_line(app)), rows[0]);
    frame.render_widget(app.description_input.clone(), rows[1]);
    frame.render_widget(app.amount_input.clone(), rows[2]);
}

fn kind_line(app: &App) -> Line<'static> {
    let focused = app.focused_field == Field::Kind;
    let mut spans = vec![Span::styled("Type: ", Style::default().fg(Color::Cyan))];

    for kind in TransactionKind::ALL {
        let color = match kind {
            TransactionKind::Income => Color::Green,
            TransactionKind::Expense => Color::Red,
        };
        let mut style = Style::default().fg(color);
        if kind == app.kind {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {} {} ", kind.sign(), kind), style));
        spans.push(Span::raw(" "));
    }

    if focused {
        spans.push(Span::styled(
            "(space to switch)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}
