//! Event handling for the TUI
//!
//! Reads terminal events with crossterm. Reads block until input arrives;
//! there is no background thread and no tick.

use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events the TUI reacts to
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Blocking source of terminal events
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next event we care about
    ///
    /// Key releases and repeats are skipped so each press is handled once.
    pub fn next(&self) -> io::Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => {}
            }
        }
    }
}
