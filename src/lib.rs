//! budget-tracker - Terminal-based income and expense tracker
//!
//! Add income and expense entries, and see the available balance, totals
//! and expense percentages update as you go.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Transactions, ids, money and percentages
//! - `storage`: In-memory transaction store
//! - `services`: Id assignment and aggregation over the store
//! - `display`: View-models for the summary and transaction rows
//! - `controller`: Event handling against a render surface
//! - `tui`: Interactive render surface
//! - `cli`: Batch and configuration commands
//! - `config`: Configuration and path management
//! - `logging`: tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::display::format_budget_summary;
//! use budget_tracker::models::{Money, PercentageRounding, TransactionKind};
//! use budget_tracker::services::BudgetService;
//!
//! let mut service = BudgetService::default();
//! service.add_transaction(TransactionKind::Income, Money::from_dollars(300), "salary")?;
//! service.add_transaction(TransactionKind::Expense, Money::from_dollars(100), "rent")?;
//!
//! let summary = format_budget_summary(
//!     service.total_income(),
//!     service.total_expense(),
//!     PercentageRounding::TwoStep,
//! );
//! assert_eq!(summary.available, Money::from_dollars(200));
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
