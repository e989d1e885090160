//! Service layer for budget-tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and computed fields.

pub mod budget;

pub use budget::BudgetService;
