//! Logging setup
//!
//! Console commands log to stderr. The TUI owns the terminal, so while it
//! runs log lines go to a file instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{BudgetError, BudgetResult};

/// Where log lines are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_level` when set. An unparsable level falls
/// back to `info`.
pub fn init_logging(target: LogTarget, default_level: &str) -> BudgetResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Arc::new(log_file))
                        .with_ansi(false),
                )
                .try_init()
        }
    };

    result.map_err(|e| BudgetError::Config(format!("Failed to install logger: {}", e)))
}
