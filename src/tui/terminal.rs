//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::controller::Controller;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings);
    let mut controller = Controller::from_settings(settings);
    controller.init(&mut app, Local::now().date_naive());
    info!(title = %app.title, "tui started");

    let events = EventHandler::new();
    let result = event_loop(&mut terminal, &mut app, &mut controller, &events);

    // Restore even if the loop failed
    restore_terminal()?;
    info!(
        transactions = controller.service().all_transactions().len(),
        "tui closed"
    );

    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    controller: &mut Controller,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, controller, events.next()?);
    }
    Ok(())
}
