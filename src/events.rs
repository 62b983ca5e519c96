//! Key event dispatch: the input controller.
//!
//! Translates crossterm key events into [`App`] operations. Dispatch is
//! explicit per focus target; the confirmation modal, when visible, takes
//! priority over everything except quit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::models::Filter;

/// Handle one key press, mutating the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Global: Ctrl+C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Confirmation modal swallows keys until answered.
    if app.confirming_clear_all {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_clear_all(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_clear_all(),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.backspace();
            app.mark_dirty();
        }
        KeyCode::Delete => {
            app.input.delete_char();
            app.mark_dirty();
        }
        KeyCode::Left => {
            app.input.move_cursor_left();
            app.mark_dirty();
        }
        KeyCode::Right => {
            app.input.move_cursor_right();
            app.mark_dirty();
        }
        KeyCode::Home => {
            app.input.move_cursor_home();
            app.mark_dirty();
        }
        KeyCode::End => {
            app.input.move_cursor_end();
            app.mark_dirty();
        }
        KeyCode::Esc | KeyCode::Down => app.focus_list(),
        KeyCode::Char(c) => {
            app.input.insert_char(c);
            app.mark_dirty();
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => app.delete_selected(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Char('c') => app.clear_completed(),
        KeyCode::Char('C') => app.request_clear_all(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('i') | KeyCode::Esc => app.focus_input(),
        _ => {}
    }
}
