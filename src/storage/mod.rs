//! Storage layer for budget-tracker
//!
//! Transactions are kept in memory only and are gone when the process exits.

pub mod transactions;

pub use transactions::TransactionStore;
