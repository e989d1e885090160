//! Income and expense list views
//!
//! Each list is a table of description, signed value and (for expenses)
//! the share of total expenses.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::RowView;
use crate::models::TransactionKind;
use crate::tui::app::{App, FocusedList};

/// Render both transaction lists
pub fn render(frame: &mut Frame, app: &App, income_area: Rect, expense_area: Rect) {
    render_list(frame, app, TransactionKind::Income, income_area);
    render_list(frame, app, TransactionKind::Expense, expense_area);
}

fn render_list(frame: &mut Frame, app: &App, kind: TransactionKind, area: Rect) {
    let (rows, selected, focused, accent) = match kind {
        TransactionKind::Income => (
            &app.income_rows,
            app.selected_income_index,
            app.focused_list == FocusedList::Income,
            Color::Green,
        ),
        TransactionKind::Expense => (
            &app.expense_rows,
            app.selected_expense_index,
            app.focused_list == FocusedList::Expense,
            Color::Red,
        ),
    };

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} ", kind))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let text = Paragraph::new("Nothing here yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let table_rows: Vec<Row> = rows.iter().map(|row| table_row(row, symbol, accent)).collect();

    let widths = [
        Constraint::Min(10),    // Description
        Constraint::Length(14), // Value
        Constraint::Length(6),  // Percentage
    ];

    let table = Table::new(table_rows, widths)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if focused {
        state.select(Some(selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row<'a>(row: &'a RowView, symbol: &str, accent: Color) -> Row<'a> {
    let description = if row.description.is_empty() {
        "(no description)"
    } else {
        row.description.as_str()
    };

    Row::new(vec![
        Cell::from(description),
        Cell::from(row.value_label(symbol)).style(Style::default().fg(accent)),
        Cell::from(row.percentage_label()).style(Style::default().fg(Color::Yellow)),
    ])
}
