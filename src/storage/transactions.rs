//! In-memory transaction store
//!
//! Holds transactions in insertion order. Nothing is written to disk; the
//! store lives as long as the budget service that owns it.

use crate::models::{Transaction, TransactionId};

/// Ordered list of transactions
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the end of the list
    pub fn append(&mut self, txn: Transaction) -> &Transaction {
        self.transactions.push(txn);
        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions, oldest first
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Remove the first transaction with the given id
    ///
    /// Returns the removed transaction, or `None` if no transaction matched.
    pub fn remove_by_id(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
