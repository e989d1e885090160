//! Configuration commands
//!
//! `init` writes the default settings file; `config` shows where files
//! live and which settings are in effect.

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;

/// Write settings to disk if they are not there yet
pub fn handle_init_command(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    if paths.is_initialized() {
        println!(
            "Already initialized: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Wrote default settings to {}", paths.settings_file().display());
    Ok(())
}

/// Format paths and settings for display
pub fn format_config(paths: &BudgetPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("budget-tracker configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Base directory:  {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:   {}\n", paths.settings_file().display()));
    output.push_str(&format!("Log file (TUI):  {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:     {}\n", settings.currency_symbol));
    output.push_str(&format!("  Title format:        {}\n", settings.title_format));
    output.push_str(&format!("  Percentage rounding: {:?}\n", settings.percentage_rounding));
    output.push_str(&format!("  Log level:           {}\n", settings.log_level));
    output
}

pub fn handle_config_command(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    print!("{}", format_config(paths, settings));
    Ok(())
}
