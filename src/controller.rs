//! Controller wiring input events to the budget service
//!
//! A render surface (the TUI, or the batch console) owns the input fields and
//! the drawn output. It forwards three kinds of events here: startup, a form
//! submission, and a delete request for one row. Each event runs to
//! completion against the surface before the next one is handled.

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::Settings;
use crate::display::{format_budget_summary, format_transaction_row, RowView, SummaryView};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::services::BudgetService;
use crate::storage::TransactionStore;

const FALLBACK_TITLE_FORMAT: &str = "%B %Y";

/// Input fields of the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Kind,
    Amount,
    Description,
}

/// Something that can show budget state and hold the entry form
pub trait RenderSurface {
    /// Current raw value of an input field
    fn read_field(&self, field: Field) -> String;

    fn render_title(&mut self, title: &str);

    fn render_summary(&mut self, summary: &SummaryView);

    /// Show a row; a row with the same id is replaced in place
    fn render_row(&mut self, row: &RowView);

    fn remove_row(&mut self, id: TransactionId);

    fn clear_inputs(&mut self);

    fn focus_field(&mut self, field: Field);

    /// Tell the user an input was rejected
    fn report_error(&mut self, _message: &str) {}
}

/// Event handler between a render surface and the budget service
#[derive(Debug)]
pub struct Controller {
    service: BudgetService,
    title_format: String,
}

impl Controller {
    pub fn new(service: BudgetService, title_format: impl Into<String>) -> Self {
        Self {
            service,
            title_format: title_format.into(),
        }
    }

    /// Build a controller over an empty store using the given settings
    pub fn from_settings(settings: &Settings) -> Self {
        let service = BudgetService::new(TransactionStore::new(), settings.percentage_rounding);
        Self::new(service, settings.title_format.clone())
    }

    pub fn service(&self) -> &BudgetService {
        &self.service
    }

    /// Startup: publish the period title and an empty summary
    pub fn init<S: RenderSurface>(&self, surface: &mut S, today: NaiveDate) {
        surface.render_title(&self.title_for(today));
        surface.render_summary(&self.summary());
    }

    /// Form submission
    ///
    /// On invalid input nothing is mutated and the inputs are left as they
    /// were; the problem is logged and reported to the surface.
    pub fn submit<S: RenderSurface>(&mut self, surface: &mut S) -> Option<Transaction> {
        match self.try_submit(surface) {
            Ok(txn) => {
                self.publish_summary(surface);
                surface.render_row(&self.row_for(&txn));
                self.refresh_expense_rows(surface, Some(txn.id));
                surface.clear_inputs();
                surface.focus_field(Field::Description);
                Some(txn)
            }
            Err(e) => {
                warn!(error = %e, "submission rejected");
                surface.report_error(&e.to_string());
                None
            }
        }
    }

    /// Delete request for the row with the given id
    ///
    /// The row is removed from the surface even if the store no longer knows
    /// the id.
    pub fn delete<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        id: TransactionId,
    ) -> Option<Transaction> {
        let removed = self.service.delete_transaction(id);
        surface.remove_row(id);
        if removed.as_ref().is_some_and(Transaction::is_expense) {
            self.refresh_expense_rows(surface, None);
        }
        self.publish_summary(surface);
        removed
    }

    /// Current summary view-model
    pub fn summary(&self) -> SummaryView {
        format_budget_summary(
            self.service.total_income(),
            self.service.total_expense(),
            self.service.rounding(),
        )
    }

    /// View-models for every stored transaction, in insertion order
    pub fn rows(&self) -> Vec<RowView> {
        self.service
            .all_transactions()
            .iter()
            .map(|txn| self.row_for(txn))
            .collect()
    }

    /// Title for the given day, e.g. "March 2026"
    pub fn title_for(&self, today: NaiveDate) -> String {
        let mut title = String::new();
        if write!(title, "{}", today.format(&self.title_format)).is_ok() {
            return title;
        }

        warn!(format = %self.title_format, "invalid title format, using default");
        today.format(FALLBACK_TITLE_FORMAT).to_string()
    }

    fn try_submit<S: RenderSurface>(&mut self, surface: &S) -> BudgetResult<Transaction> {
        let kind: TransactionKind = surface.read_field(Field::Kind).parse()?;

        let raw_amount = surface.read_field(Field::Amount);
        let amount = Money::parse(&raw_amount)
            .map_err(|e| BudgetError::InvalidAmount(e.to_string()))?;

        let description = surface.read_field(Field::Description);
        self.service.add_transaction(kind, amount, description)
    }

    fn row_for(&self, txn: &Transaction) -> RowView {
        format_transaction_row(
            txn,
            self.service.total_income(),
            self.service.total_expense(),
            self.service.rounding(),
        )
    }

    fn publish_summary<S: RenderSurface>(&self, surface: &mut S) {
        surface.render_summary(&self.summary());
    }

    /// Re-render expense rows so their percentages follow the current total
    fn refresh_expense_rows<S: RenderSurface>(&self, surface: &mut S, skip: Option<TransactionId>) {
        for txn in self.service.transactions_by_kind(TransactionKind::Expense) {
            if Some(txn.id) != skip {
                surface.render_row(&self.row_for(txn));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Percentage, PercentageRounding};
    use std::collections::HashMap;

    /// Records everything the controller publishes
    #[derive(Default)]
    struct FakeSurface {
        fields: HashMap<Field, String>,
        title: Option<String>,
        summary: Option<SummaryView>,
        rows: Vec<RowView>,
        focused: Option<Field>,
        errors: Vec<String>,
    }

    impl FakeSurface {
        fn fill(&mut self, kind: &str, amount: &str, description: &str) {
            self.fields.insert(Field::Kind, kind.to_string());
            self.fields.insert(Field::Amount, amount.to_string());
            self.fields.insert(Field::Description, description.to_string());
        }

        fn row(&self, description: &str) -> Option<&RowView> {
            self.rows.iter().find(|r| r.description == description)
        }
    }

    impl RenderSurface for FakeSurface {
        fn read_field(&self, field: Field) -> String {
            self.fields.get(&field).cloned().unwrap_or_default()
        }

        fn render_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }

        fn render_summary(&mut self, summary: &SummaryView) {
            self.summary = Some(summary.clone());
        }

        fn render_row(&mut self, row: &RowView) {
            match self.rows.iter_mut().find(|r| r.id == row.id) {
                Some(existing) => *existing = row.clone(),
                None => self.rows.push(row.clone()),
            }
        }

        fn remove_row(&mut self, id: TransactionId) {
            self.rows.retain(|r| r.id != id);
        }

        fn clear_inputs(&mut self) {
            self.fields.remove(&Field::Amount);
            self.fields.remove(&Field::Description);
        }

        fn focus_field(&mut self, field: Field) {
            self.focused = Some(field);
        }

        fn report_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn controller() -> Controller {
        Controller::from_settings(&Settings::default())
    }

    #[test]
    fn test_init_sets_title_and_empty_summary() {
        let controller = controller();
        let mut surface = FakeSurface::default();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        controller.init(&mut surface, today);

        assert_eq!(surface.title.as_deref(), Some("March 2026"));
        let summary = surface.summary.unwrap();
        assert!(summary.available.is_zero());
        assert!(summary.expense_percentage.is_undefined());
    }

    #[test]
    fn test_invalid_title_format_falls_back() {
        let controller = Controller::new(BudgetService::default(), "%Y-%");
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(controller.title_for(today), "January 2026");
    }

    #[test]
    fn test_submit_adds_and_publishes() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();
        surface.fill("inc", "100", "salary");

        let txn = controller.submit(&mut surface).unwrap();

        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(surface.rows.len(), 1);
        assert_eq!(surface.rows[0].value_label("$"), "+ $100.00");
        assert_eq!(surface.summary.as_ref().unwrap().income, Money::from_dollars(100));
        assert_eq!(surface.read_field(Field::Amount), "");
        assert_eq!(surface.read_field(Field::Description), "");
        assert_eq!(surface.focused, Some(Field::Description));
        assert!(surface.errors.is_empty());
    }

    #[test]
    fn test_description_kept_as_typed() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();
        surface.fill("exp", "12", "  coffee, two cups ");

        let txn = controller.submit(&mut surface).unwrap();

        assert_eq!(txn.description, "  coffee, two cups ");
        assert!(surface.row("  coffee, two cups ").is_some());
    }

    #[test]
    fn test_invalid_kind_changes_nothing() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();
        surface.fill("gift", "25", "birthday");

        assert!(controller.submit(&mut surface).is_none());

        assert!(controller.service().all_transactions().is_empty());
        assert!(surface.rows.is_empty());
        assert!(surface.summary.is_none());
        assert_eq!(surface.read_field(Field::Amount), "25");
        assert_eq!(surface.read_field(Field::Description), "birthday");
        assert_eq!(surface.errors.len(), 1);
        assert!(surface.errors[0].contains("gift"));
    }

    #[test]
    fn test_invalid_amounts_are_rejected() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();

        for amount in ["", "abc", "-5"] {
            surface.fill("exp", amount, "bad");
            assert!(controller.submit(&mut surface).is_none());
        }

        assert!(controller.service().all_transactions().is_empty());
        assert_eq!(surface.errors.len(), 3);
    }

    #[test]
    fn test_scenario_percentages_follow_totals() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();

        surface.fill("inc", "100", "salary");
        controller.submit(&mut surface).unwrap();
        surface.fill("exp", "40", "food");
        let food = controller.submit(&mut surface).unwrap();
        surface.fill("exp", "10", "bus");
        controller.submit(&mut surface).unwrap();

        let summary = surface.summary.clone().unwrap();
        assert_eq!(summary.income, Money::from_dollars(100));
        assert_eq!(summary.expense, Money::from_dollars(50));
        assert_eq!(summary.available, Money::from_dollars(50));
        assert_eq!(summary.expense_percentage.to_string(), "50%");

        assert_eq!(surface.row("food").unwrap().percentage_label(), "80%");
        assert_eq!(surface.row("bus").unwrap().percentage_label(), "20%");
        assert_eq!(surface.row("salary").unwrap().percentage, None);

        controller.delete(&mut surface, food.id);

        assert!(surface.row("food").is_none());
        assert_eq!(surface.summary.as_ref().unwrap().expense, Money::from_dollars(10));
        assert_eq!(surface.row("bus").unwrap().percentage_label(), "100%");
        assert!(controller
            .service()
            .all_transactions()
            .iter()
            .all(|t| t.description != "food"));
    }

    #[test]
    fn test_delete_unknown_id_still_republishes() {
        let mut controller = controller();
        let mut surface = FakeSurface::default();
        surface.fill("inc", "10", "tip");
        controller.submit(&mut surface).unwrap();

        assert!(controller.delete(&mut surface, TransactionId::new(77)).is_none());
        assert_eq!(surface.rows.len(), 1);
        assert_eq!(controller.service().all_transactions().len(), 1);
        assert_eq!(surface.summary.as_ref().unwrap().income, Money::from_dollars(10));
    }

    #[test]
    fn test_rows_snapshot_uses_configured_rounding() {
        let mut settings = Settings::default();
        settings.percentage_rounding = PercentageRounding::Direct;
        let mut controller = Controller::from_settings(&settings);
        let mut surface = FakeSurface::default();

        surface.fill("exp", "1", "a");
        controller.submit(&mut surface).unwrap();
        surface.fill("exp", "5", "b");
        controller.submit(&mut surface).unwrap();

        let rows = controller.rows();
        assert_eq!(rows.len(), 2);
        match rows[0].percentage {
            Some(Percentage::Value(v)) => assert!((v - 100.0 / 6.0).abs() < 1e-9),
            other => panic!("unexpected percentage {:?}", other),
        }
    }
}
