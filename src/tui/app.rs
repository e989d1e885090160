//! Application state for the TUI
//!
//! The App struct holds everything the views draw: the entry form, the
//! summary header and the two transaction lists. It is the render surface
//! the controller publishes to.

use crate::config::settings::Settings;
use crate::controller::{Field, RenderSurface};
use crate::display::{RowView, SummaryView};
use crate::models::{TransactionId, TransactionKind};

use super::widgets::TextInput;

/// Which transaction list has the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedList {
    #[default]
    Income,
    Expense,
}

impl FocusedList {
    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub should_quit: bool,

    /// Period label shown in the header
    pub title: String,

    pub summary: SummaryView,

    pub income_rows: Vec<RowView>,
    pub expense_rows: Vec<RowView>,

    /// Selected kind in the type toggle
    pub kind: TransactionKind,
    pub amount_input: TextInput,
    pub description_input: TextInput,
    pub focused_field: Field,

    pub focused_list: FocusedList,
    pub selected_income_index: usize,
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        let mut app = Self {
            settings,
            should_quit: false,
            title: String::new(),
            summary: SummaryView::default(),
            income_rows: Vec::new(),
            expense_rows: Vec::new(),
            kind: TransactionKind::Income,
            amount_input: TextInput::new().label("Value").placeholder("0.00"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Add description"),
            focused_field: Field::Description,
            focused_list: FocusedList::default(),
            selected_income_index: 0,
            selected_expense_index: 0,
            status_message: None,
            status_is_error: false,
        };
        app.update_focus();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Move to the next form field (Tab)
    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            Field::Kind => Field::Description,
            Field::Description => Field::Amount,
            Field::Amount => Field::Kind,
        };
        self.update_focus();
    }

    /// Move to the previous form field (Shift+Tab)
    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            Field::Kind => Field::Amount,
            Field::Description => Field::Kind,
            Field::Amount => Field::Description,
        };
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == Field::Amount;
        self.description_input.focused = self.focused_field == Field::Description;
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    /// Text input for the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            Field::Amount => Some(&mut self.amount_input),
            Field::Description => Some(&mut self.description_input),
            Field::Kind => None,
        }
    }

    pub fn toggle_list_focus(&mut self) {
        self.focused_list = self.focused_list.toggle();
    }

    fn focused_rows_len(&self) -> usize {
        match self.focused_list {
            FocusedList::Income => self.income_rows.len(),
            FocusedList::Expense => self.expense_rows.len(),
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focused_list {
            FocusedList::Income => &mut self.selected_income_index,
            FocusedList::Expense => &mut self.selected_expense_index,
        }
    }

    pub fn move_selection_up(&mut self) {
        let index = self.focused_index_mut();
        *index = index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.focused_rows_len();
        let index = self.focused_index_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Id of the selected row in the focused list
    pub fn selected_row_id(&self) -> Option<TransactionId> {
        match self.focused_list {
            FocusedList::Income => self.income_rows.get(self.selected_income_index),
            FocusedList::Expense => self.expense_rows.get(self.selected_expense_index),
        }
        .map(|row| row.id)
    }

    fn clamp_selection(&mut self) {
        self.selected_income_index = self
            .selected_income_index
            .min(self.income_rows.len().saturating_sub(1));
        self.selected_expense_index = self
            .selected_expense_index
            .min(self.expense_rows.len().saturating_sub(1));
    }

    fn rows_for(&mut self, kind: TransactionKind) -> &mut Vec<RowView> {
        match kind {
            TransactionKind::Income => &mut self.income_rows,
            TransactionKind::Expense => &mut self.expense_rows,
        }
    }
}

impl RenderSurface for App<'_> {
    fn read_field(&self, field: Field) -> String {
        match field {
            Field::Kind => self.kind.code().to_string(),
            Field::Amount => self.amount_input.value().to_string(),
            Field::Description => self.description_input.value().to_string(),
        }
    }

    fn render_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render_summary(&mut self, summary: &SummaryView) {
        self.summary = summary.clone();
    }

    fn render_row(&mut self, row: &RowView) {
        let rows = self.rows_for(row.kind);
        match rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => *existing = row.clone(),
            None => rows.push(row.clone()),
        }
    }

    fn remove_row(&mut self, id: TransactionId) {
        self.income_rows.retain(|r| r.id != id);
        self.expense_rows.retain(|r| r.id != id);
        self.clamp_selection();
    }

    fn clear_inputs(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
    }

    fn focus_field(&mut self, field: Field) {
        self.focused_field = field;
        self.update_focus();
    }

    fn report_error(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
        self.status_is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PercentageRounding, Transaction};
    use crate::display::format_transaction_row;

    fn row(id: u64, kind: TransactionKind) -> RowView {
        let txn = Transaction::new(TransactionId::new(id), kind, Money::from_dollars(10), "x");
        format_transaction_row(&txn, Money::zero(), Money::from_dollars(10), PercentageRounding::TwoStep)
    }

    #[test]
    fn test_rows_go_to_their_list() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.render_row(&row(1, TransactionKind::Income));
        app.render_row(&row(2, TransactionKind::Expense));
        app.render_row(&row(2, TransactionKind::Expense));

        assert_eq!(app.income_rows.len(), 1);
        assert_eq!(app.expense_rows.len(), 1);
    }

    #[test]
    fn test_field_cycle_and_focus() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert_eq!(app.focused_field, Field::Description);
        assert!(app.description_input.focused);

        app.next_field();
        assert_eq!(app.focused_field, Field::Amount);
        assert!(app.amount_input.focused);
        assert!(!app.description_input.focused);

        app.next_field();
        assert_eq!(app.focused_field, Field::Kind);
        assert!(app.focused_input().is_none());

        app.prev_field();
        assert_eq!(app.focused_field, Field::Amount);
    }

    #[test]
    fn test_kind_field_reads_form_code() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert_eq!(app.read_field(Field::Kind), "inc");
        app.toggle_kind();
        assert_eq!(app.read_field(Field::Kind), "exp");
    }

    #[test]
    fn test_selection_clamps_after_remove() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.render_row(&row(1, TransactionKind::Expense));
        app.render_row(&row(2, TransactionKind::Expense));
        app.focused_list = FocusedList::Expense;
        app.move_selection_down();
        assert_eq!(app.selected_row_id(), Some(TransactionId::new(2)));

        app.remove_row(TransactionId::new(2));
        assert_eq!(app.selected_expense_index, 0);
        assert_eq!(app.selected_row_id(), Some(TransactionId::new(1)));
    }

    #[test]
    fn test_report_error_sets_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.report_error("bad amount");
        assert!(app.status_is_error);
        app.set_status("ok");
        assert!(!app.status_is_error);
        app.clear_status();
        assert!(app.status_message.is_none());
    }
}
