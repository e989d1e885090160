//! Layout definitions for the TUI
//!
//! Top to bottom: budget header, entry form, the two transaction lists
//! side by side, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and summary values
    pub header: Rect,
    /// Type toggle, description and value inputs
    pub form: Rect,
    pub income_list: Rect,
    pub expense_list: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Header
                Constraint::Length(5), // Form
                Constraint::Min(3),    // Lists
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            form: vertical[1],
            income_list: lists[0],
            expense_list: lists[1],
            status_bar: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_lists_evenly() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 7);
        assert_eq!(layout.form.height, 5);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.income_list.width, 50);
        assert_eq!(layout.expense_list.width, 50);
        assert_eq!(layout.income_list.height, 27);
    }
}
