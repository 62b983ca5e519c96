//! Integration tests for the App: input flow, focus, filter, confirmation
//! and the dirty-flag/tick behavior of the cosmetic timers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use taskdeck::app::{App, Focus, GHOST_TICKS, INPUT_FLASH_TICKS};
use taskdeck::events::handle_key;
use taskdeck::models::Filter;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, press(KeyCode::Char(c)));
    }
}

// =============================================================================
// Dirty flag
// =============================================================================

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let app = App::new();
    assert!(app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_key_handling_marks_dirty() {
    let mut app = App::new();
    app.needs_redraw = false;

    handle_key(&mut app, press(KeyCode::Char('x')));
    assert!(app.needs_redraw, "typing should mark dirty");
}

#[test]
fn test_idle_tick_does_not_mark_dirty() {
    let mut app = App::new();
    app.needs_redraw = false;

    app.tick();
    assert!(!app.needs_redraw, "tick with no animations should not redraw");
}

// =============================================================================
// Input flow
// =============================================================================

#[test]
fn test_add_flow_clears_input_and_keeps_input_focus() {
    let mut app = App::new();
    type_text(&mut app, "buy milk");
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.stats().total, 1);
    assert!(app.input.is_empty(), "input clears on successful add");
    assert_eq!(app.focus, Focus::Input, "focus stays in the input");
}

#[test]
fn test_rejected_add_flashes_then_settles() {
    let mut app = App::new();
    type_text(&mut app, "   ");
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.stats().total, 0);
    assert_eq!(app.input_flash, INPUT_FLASH_TICKS);
    assert!(app.animations_active());

    for _ in 0..INPUT_FLASH_TICKS {
        app.tick();
    }
    assert_eq!(app.input_flash, 0, "flash expires");
    assert_eq!(app.stats().total, 0, "ticks never touch the store");
}

// =============================================================================
// Filter behavior
// =============================================================================

#[test]
fn test_filter_is_view_only() {
    let mut app = App::new();
    let a = app.store.add("active task").unwrap();
    app.store.add("another").unwrap();
    app.store.toggle(a);

    app.set_filter(Filter::Active);
    assert_eq!(app.visible_tasks().len(), 1);
    assert_eq!(app.stats().total, 2, "stats ignore the filter");
    assert_eq!(app.tasks().len(), 2, "store unaffected by filter");

    app.set_filter(Filter::Completed);
    assert_eq!(app.visible_tasks().len(), 1);
    assert_eq!(app.visible_tasks()[0].id, a);

    app.set_filter(Filter::All);
    assert_eq!(app.visible_tasks().len(), 2);
}

#[test]
fn test_selection_follows_visible_rows() {
    let mut app = App::new();
    for i in 0..3 {
        app.store.add(&format!("task {i}")).unwrap();
    }
    app.focus_list();
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.selected, 2);

    // Deleting the last row pulls the selection back in range.
    handle_key(&mut app, press(KeyCode::Char('d')));
    assert_eq!(app.stats().total, 2);
    assert_eq!(app.selected, 1);
}

// =============================================================================
// Delete ghosts
// =============================================================================

#[test]
fn test_delete_leaves_expiring_ghost() {
    let mut app = App::new();
    app.store.add("doomed").unwrap();
    app.focus_list();
    handle_key(&mut app, press(KeyCode::Char('d')));

    assert_eq!(app.stats().total, 0, "store removal is immediate");
    assert_eq!(app.ghosts.len(), 1);

    for _ in 0..GHOST_TICKS {
        app.tick();
    }
    assert!(app.ghosts.is_empty());
}

// =============================================================================
// Clear-all confirmation
// =============================================================================

#[test]
fn test_clear_all_full_flow() {
    let mut app = App::new();
    for i in 0..3 {
        app.store.add(&format!("task {i}")).unwrap();
    }
    app.focus_list();

    handle_key(&mut app, press(KeyCode::Char('C')));
    assert!(app.confirming_clear_all);
    assert_eq!(app.stats().total, 3);

    handle_key(&mut app, press(KeyCode::Char('y')));
    assert!(!app.confirming_clear_all);
    assert_eq!(app.stats().total, 0);
}

#[test]
fn test_clear_all_cancel_keeps_tasks() {
    let mut app = App::new();
    app.store.add("survivor").unwrap();
    app.focus_list();

    handle_key(&mut app, press(KeyCode::Char('C')));
    handle_key(&mut app, press(KeyCode::Esc));

    assert!(!app.confirming_clear_all);
    assert_eq!(app.stats().total, 1);
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn test_tab_toggles_focus() {
    let mut app = App::new();
    assert_eq!(app.focus, Focus::Input);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::List);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn test_list_keys_do_not_type_into_input() {
    let mut app = App::new();
    app.store.add("a").unwrap();
    app.focus_list();

    handle_key(&mut app, press(KeyCode::Char('j')));
    handle_key(&mut app, press(KeyCode::Char('k')));
    assert!(app.input.is_empty(), "list navigation must not edit the input");
}
