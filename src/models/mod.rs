//! Core data models for budget-tracker
//!
//! Transactions, their ids and kinds, money amounts and percentages.

pub mod ids;
pub mod money;
pub mod percentage;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use percentage::{Percentage, PercentageRounding};
pub use transaction::{Transaction, TransactionKind};
