//! Event handler for the TUI
//!
//! Routes key presses either to the form (editing, submit) or to the
//! transaction lists (selection, delete).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{Controller, Field};
use crate::models::TransactionKind;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, controller: &mut Controller, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, controller, key),
        // Terminal will redraw automatically
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, controller: &mut Controller, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if ctrl => {
            app.quit();
            return;
        }
        KeyCode::Char('d') if ctrl => {
            delete_selected(app, controller);
            return;
        }
        KeyCode::Char('l') if ctrl => {
            app.toggle_list_focus();
            return;
        }
        KeyCode::Tab => {
            app.next_field();
            return;
        }
        KeyCode::BackTab => {
            app.prev_field();
            return;
        }
        KeyCode::Up => {
            app.move_selection_up();
            return;
        }
        KeyCode::Down => {
            app.move_selection_down();
            return;
        }
        _ => {}
    }

    if app.focused_field == Field::Kind {
        handle_kind_key(app, key);
    } else {
        handle_text_key(app, controller, key);
    }
}

/// Keys while the type toggle is focused
fn handle_kind_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => app.toggle_kind(),
        KeyCode::Char('+') => app.kind = TransactionKind::Income,
        KeyCode::Char('-') => app.kind = TransactionKind::Expense,
        KeyCode::Enter => app.next_field(),
        _ => {}
    }
}

/// Keys while the amount or description field is focused
fn handle_text_key(app: &mut App, controller: &mut Controller, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.clear_status();
        if let Some(txn) = controller.submit(app) {
            app.set_status(format!("Added {} #{}", txn.kind, txn.id));
        }
        return;
    }

    let Some(input) = app.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn delete_selected(app: &mut App, controller: &mut Controller) {
    let Some(id) = app.selected_row_id() else {
        app.set_status("Nothing selected");
        return;
    };

    match controller.delete(app, id) {
        Some(txn) => app.set_status(format!("Deleted {} #{}", txn.kind, txn.id)),
        None => app.clear_status(),
    }
}
