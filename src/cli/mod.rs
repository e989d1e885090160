//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the controller.

pub mod batch;
pub mod config;

pub use batch::{handle_batch_command, run_batch, BatchSurface};
pub use config::{handle_config_command, handle_init_command};
