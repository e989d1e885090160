//! Budget summary view-model
//!
//! Turns the two aggregate totals into what the summary header shows:
//! available balance, income, expenses and the expense share of income.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Money, Percentage, PercentageRounding};

/// Values for the summary header
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// Income minus expenses, never below zero
    pub available: Money,
    pub income: Money,
    pub expense: Money,
    /// Expenses as a share of income; undefined without income
    pub expense_percentage: Percentage,
}

impl SummaryView {
    pub fn available_label(&self, symbol: &str) -> String {
        format!("+ {}", self.available.format_with_symbol(symbol))
    }

    pub fn income_label(&self, symbol: &str) -> String {
        format!("+ {}", self.income.format_with_symbol(symbol))
    }

    pub fn expense_label(&self, symbol: &str) -> String {
        format!("- {}", self.expense.format_with_symbol(symbol))
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        format_budget_summary(Money::zero(), Money::zero(), PercentageRounding::default())
    }
}

/// Build the summary view-model from aggregate totals
pub fn format_budget_summary(
    total_income: Money,
    total_expense: Money,
    rounding: PercentageRounding,
) -> SummaryView {
    let available = (total_income - total_expense).max(Money::zero());

    SummaryView {
        available,
        income: total_income,
        expense: total_expense,
        expense_percentage: Percentage::of(total_expense, total_income, rounding),
    }
}

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Budget")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render the summary as a console table
pub fn format_summary_table(summary: &SummaryView, symbol: &str) -> String {
    let lines = vec![
        SummaryLine {
            label: "Available",
            value: summary.available_label(symbol),
        },
        SummaryLine {
            label: "Income",
            value: summary.income_label(symbol),
        },
        SummaryLine {
            label: "Expenses",
            value: summary.expense_label(symbol),
        },
        SummaryLine {
            label: "Expenses / income",
            value: summary.expense_percentage.to_string(),
        },
    ];

    Table::new(lines).with(Style::rounded()).to_string()
}
