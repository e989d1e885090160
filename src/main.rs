use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{handle_batch_command, handle_config_command, handle_init_command};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::logging::{init_logging, LogTarget};
use budget_tracker::models::TransactionId;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal-based income and expense tracker",
    long_about = "budget-tracker keeps a running list of income and expenses \
                  for the current session and shows what is left to spend, \
                  your totals, and how much of your spending each expense takes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Replay a CSV file of entries and print the resulting budget
    Batch {
        /// CSV file with a `type,amount,description` header
        file: PathBuf,
        /// Delete the transaction with this id after importing (repeatable)
        #[arg(short, long = "delete", value_name = "ID")]
        delete: Vec<TransactionId>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_target = match cli.command {
        Some(Commands::Tui) => LogTarget::File(paths.log_file()),
        _ => LogTarget::Stderr,
    };
    init_logging(log_target, &settings.log_level)?;

    match cli.command {
        Some(Commands::Tui) => {
            budget_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Batch { file, delete }) => {
            handle_batch_command(&settings, &file, &delete)?;
        }
        Some(Commands::Init) => {
            handle_init_command(&paths, &settings)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            println!("budget-tracker - Terminal-based income and expense tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
