//! Terminal User Interface module
//!
//! The interactive render surface: a budget header, an entry form and
//! side-by-side income and expense lists, drawn with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
