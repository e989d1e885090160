//! Display formatting
//!
//! Pure functions from domain data to view-models. Nothing here touches a
//! terminal; the render surfaces decide how the values are drawn.

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_summary, format_summary_table, SummaryView};
pub use transaction::{format_row_table, format_transaction_row, RowView};
