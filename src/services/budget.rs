//! Budget service
//!
//! Provides business logic on top of the transaction store: id assignment,
//! amount validation, per-kind totals and expense percentages.

use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Money, Percentage, PercentageRounding, Transaction, TransactionId, TransactionKind,
};
use crate::storage::TransactionStore;

/// Service for adding, removing and aggregating transactions
#[derive(Debug)]
pub struct BudgetService {
    store: TransactionStore,
    next_id: TransactionId,
    rounding: PercentageRounding,
}

impl BudgetService {
    /// Create a new budget service over an explicitly constructed store
    ///
    /// If the store already holds transactions, new ids start after the
    /// highest existing one.
    pub fn new(store: TransactionStore, rounding: PercentageRounding) -> Self {
        let next_id = store
            .all()
            .iter()
            .map(|t| t.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(TransactionId::FIRST);

        Self {
            store,
            next_id,
            rounding,
        }
    }

    /// Rounding mode used for percentages
    pub fn rounding(&self) -> PercentageRounding {
        self.rounding
    }

    /// Record a new transaction
    ///
    /// Negative amounts, and amounts that would overflow the running total
    /// for their kind, are rejected and do not consume an id.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<Transaction> {
        if amount.is_negative() {
            return Err(BudgetError::InvalidAmount(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        if self.total_by_kind(kind).checked_add(amount).is_none() {
            return Err(BudgetError::InvalidAmount(format!(
                "amount {} would overflow the {} total",
                amount, kind
            )));
        }

        let id = self.next_id;
        self.next_id = id.next();

        let txn = Transaction::new(id, kind, amount, description);
        let stored = self.store.append(txn).clone();

        info!(id = %stored.id, kind = %stored.kind, amount = %stored.amount, "transaction added");
        Ok(stored)
    }

    /// Remove a transaction by id
    ///
    /// Unknown ids are ignored; the removed transaction is returned if there
    /// was one.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let removed = self.store.remove_by_id(id);
        match &removed {
            Some(txn) => info!(id = %txn.id, kind = %txn.kind, "transaction deleted"),
            None => debug!(id = %id, "delete ignored, no such transaction"),
        }
        removed
    }

    /// Sum of amounts over all transactions of a kind
    pub fn total_by_kind(&self, kind: TransactionKind) -> Money {
        self.store
            .all()
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_income(&self) -> Money {
        self.total_by_kind(TransactionKind::Income)
    }

    pub fn total_expense(&self) -> Money {
        self.total_by_kind(TransactionKind::Expense)
    }

    /// All transactions in insertion order
    pub fn all_transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    /// Transactions of one kind in insertion order
    pub fn transactions_by_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.store.all().iter().filter(|t| t.kind == kind).collect()
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.get(id)
    }

    /// Share of total expenses taken by a single expense amount
    pub fn expense_percentage(&self, amount: Money) -> Percentage {
        Percentage::of(amount, self.total_expense(), self.rounding)
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new(TransactionStore::new(), PercentageRounding::default())
    }
}
