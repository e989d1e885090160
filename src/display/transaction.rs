//! Transaction row view-model
//!
//! Provides the per-row values shown in the income and expense lists,
//! and a console table of rows for the batch command.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Money, Percentage, PercentageRounding, Transaction, TransactionId, TransactionKind};

/// Values for one rendered transaction
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Money,
    /// Share of total expenses; only set for expense rows
    pub percentage: Option<Percentage>,
}

impl RowView {
    /// Signed amount, e.g. "+ $100.00" or "- $40.00"
    pub fn value_label(&self, symbol: &str) -> String {
        format!("{} {}", self.kind.sign(), self.amount.format_with_symbol(symbol))
    }

    /// Percentage text for expense rows, empty for income rows
    pub fn percentage_label(&self) -> String {
        self.percentage.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Build the row view-model for a transaction
///
/// Expense percentages are taken against total expenses, not income.
pub fn format_transaction_row(
    txn: &Transaction,
    _income_total: Money,
    expense_total: Money,
    rounding: PercentageRounding,
) -> RowView {
    let percentage = match txn.kind {
        TransactionKind::Income => None,
        TransactionKind::Expense => Some(Percentage::of(txn.amount, expense_total, rounding)),
    };

    RowView {
        id: txn.id,
        kind: txn.kind,
        description: txn.description.clone(),
        amount: txn.amount,
        percentage,
    }
}

#[derive(Tabled)]
struct RowLine {
    #[tabled(rename = "Id")]
    id: TransactionId,
    #[tabled(rename = "Type")]
    kind: TransactionKind,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    value: String,
    #[tabled(rename = "%")]
    percentage: String,
}

/// Render rows as a console table
pub fn format_row_table(rows: &[RowView], symbol: &str) -> String {
    if rows.is_empty() {
        return "No transactions.\n".to_string();
    }

    let lines: Vec<RowLine> = rows
        .iter()
        .map(|row| RowLine {
            id: row.id,
            kind: row.kind,
            description: row.description.clone(),
            value: row.value_label(symbol),
            percentage: row.percentage_label(),
        })
        .collect();

    Table::new(lines).with(Style::rounded()).to_string()
}
