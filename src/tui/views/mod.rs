//! TUI Views module
//!
//! Contains the budget header, entry form, transaction lists and status bar.

pub mod form;
pub mod header;
pub mod lists;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    form::render(frame, app, layout.form);
    lists::render(frame, app, layout.income_list, layout.expense_list);
    status_bar::render(frame, app, layout.status_bar);
}
