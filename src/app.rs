//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`TaskStore`] plus all view-level state: input box,
//! focus, filter, selection, the dirty flag and the cosmetic timers. Every
//! user action flows through a method here, mutates the store and/or view
//! state synchronously, and marks the app dirty so the next loop iteration
//! redraws the whole frame.
//!
//! Cosmetic timers (stat pulses, the rejected-input flash, delete ghosts)
//! are advanced by [`App::tick`] only. They never gate correctness: the
//! store is always mutated before any animation starts.

use tracing::{debug, info};

use crate::models::{Filter, Task, TaskStats};
use crate::store::TaskStore;
use crate::widgets::InputBox;

/// Ticks are ~16ms. 30 ticks ≈ the 0.5s rejected-input cue.
pub const INPUT_FLASH_TICKS: u8 = 30;
/// Stat field emphasis after a value change, ~150ms.
pub const STAT_PULSE_TICKS: u8 = 9;
/// Fade-out of a just-deleted row, ~300ms.
pub const GHOST_TICKS: u8 = 18;

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// Per-field countdowns for the stats readout emphasis.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatPulses {
    pub total: u8,
    pub completed: u8,
    pub remaining: u8,
}

impl StatPulses {
    fn any_active(&self) -> bool {
        self.total > 0 || self.completed > 0 || self.remaining > 0
    }

    fn tick(&mut self) {
        self.total = self.total.saturating_sub(1);
        self.completed = self.completed.saturating_sub(1);
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// A row that just left the store, still rendered for a few ticks as a
/// best-effort removal animation. Purely view state - the store does not
/// know ghosts exist.
#[derive(Debug, Clone)]
pub struct GhostRow {
    pub text: String,
    pub completed: bool,
    /// Position the row occupied in the sequence when it was removed.
    pub index: usize,
    pub ticks: u8,
}

/// Top-level application state.
pub struct App {
    pub store: TaskStore,
    pub input: InputBox,
    pub focus: Focus,
    pub filter: Filter,
    /// Selected index into the *visible* (filtered) task list.
    pub selected: usize,
    /// Set whenever state changed and the UI must redraw.
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Ticks remaining on the rejected-input border flash.
    pub input_flash: u8,
    pub stat_pulses: StatPulses,
    pub ghosts: Vec<GhostRow>,
    /// Clear-all confirmation modal is showing.
    pub confirming_clear_all: bool,
    tick_count: u64,
    last_stats: TaskStats,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            input: InputBox::new(),
            focus: Focus::Input,
            filter: Filter::All,
            selected: 0,
            needs_redraw: true,
            should_quit: false,
            input_flash: 0,
            stat_pulses: StatPulses::default(),
            ghosts: Vec::new(),
            confirming_clear_all: false,
            tick_count: 0,
            last_stats: TaskStats::default(),
        }
    }

    // =========================================================
    // Render gating
    // =========================================================

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether any cosmetic timer still needs frames.
    pub fn animations_active(&self) -> bool {
        self.input_flash > 0 || self.stat_pulses.any_active() || !self.ghosts.is_empty()
    }

    /// Advance cosmetic timers by one tick. Never touches the store.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        if !self.animations_active() {
            return;
        }

        self.input_flash = self.input_flash.saturating_sub(1);
        self.stat_pulses.tick();
        for ghost in &mut self.ghosts {
            ghost.ticks = ghost.ticks.saturating_sub(1);
        }
        self.ghosts.retain(|g| g.ticks > 0);
        self.mark_dirty();
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // =========================================================
    // External operation surface
    // =========================================================

    /// Add a task from the current input content.
    ///
    /// Clears the input on success; on empty input the store is untouched
    /// and the input border flashes for a few ticks.
    pub fn submit_input(&mut self) {
        let text = self.input.content().to_owned();
        match self.store.add(&text) {
            Some(id) => {
                self.input.clear();
                info!(id, "task added from input");
            }
            None => {
                debug!("empty input rejected");
                self.input_flash = INPUT_FLASH_TICKS;
            }
        }
        self.refresh_stats();
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Flip completion by id. Unknown ids are silent no-ops.
    pub fn toggle_task(&mut self, id: u64) {
        self.store.toggle(id);
        self.refresh_stats();
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Remove a task by id, immediately. The fading ghost row left behind
    /// is view-only decoration and is dropped after a few ticks.
    pub fn delete_task(&mut self, id: u64) {
        let removed = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .find(|(_, t)| t.id == id)
            .map(|(i, t)| (i, t.text.clone(), t.completed));

        self.store.remove(id);

        if let Some((index, text, completed)) = removed {
            self.ghosts.push(GhostRow {
                text,
                completed,
                index,
                ticks: GHOST_TICKS,
            });
        }
        self.refresh_stats();
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Remove all completed tasks.
    pub fn clear_completed(&mut self) {
        self.store.clear_completed();
        self.refresh_stats();
        self.clamp_selection();
        self.mark_dirty();
    }

    /// Ask for confirmation before clearing everything. Skipped when the
    /// store is already empty.
    pub fn request_clear_all(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.confirming_clear_all = true;
        self.mark_dirty();
    }

    /// User confirmed: clear the store and dismiss the modal.
    pub fn confirm_clear_all(&mut self) {
        if self.confirming_clear_all {
            info!(count = self.store.len(), "clearing all tasks");
            self.store.clear_all();
            self.confirming_clear_all = false;
            self.refresh_stats();
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    pub fn cancel_clear_all(&mut self) {
        self.confirming_clear_all = false;
        self.mark_dirty();
    }

    /// Switch the view filter. Store state is never touched.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Read-only snapshot of the full sequence (ignores the filter).
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    // =========================================================
    // Selection and focus
    // =========================================================

    /// Tasks visible under the current filter, in insertion order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store
            .tasks()
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    pub fn select_next(&mut self) {
        let count = self.visible_tasks().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Toggle the task under the selection cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    /// Delete the task under the selection cursor.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn selected_task_id(&self) -> Option<u64> {
        self.visible_tasks().get(self.selected).map(|t| t.id)
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.mark_dirty();
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.clamp_selection();
        self.mark_dirty();
    }

    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => self.focus_input(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================
    // Internal
    // =========================================================

    /// Keep the selection on a valid visible row after mutations.
    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Compare stats against the last rendered values and start a pulse on
    /// each field whose value changed.
    fn refresh_stats(&mut self) {
        let stats = self.store.stats();
        if stats.total != self.last_stats.total {
            self.stat_pulses.total = STAT_PULSE_TICKS;
        }
        if stats.completed != self.last_stats.completed {
            self.stat_pulses.completed = STAT_PULSE_TICKS;
        }
        if stats.remaining != self.last_stats.remaining {
            self.stat_pulses.remaining = STAT_PULSE_TICKS;
        }
        self.last_stats = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_input_on_success() {
        let mut app = App::new();
        for c in "buy milk".chars() {
            app.input.insert_char(c);
        }
        app.submit_input();

        assert!(app.input.is_empty(), "input should clear after add");
        assert_eq!(app.stats().total, 1);
        assert_eq!(app.input_flash, 0, "no flash on success");
    }

    #[test]
    fn test_submit_empty_flashes_and_keeps_store() {
        let mut app = App::new();
        for c in "   ".chars() {
            app.input.insert_char(c);
        }
        app.submit_input();

        assert_eq!(app.stats().total, 0);
        assert_eq!(app.input_flash, INPUT_FLASH_TICKS);
    }

    #[test]
    fn test_delete_is_store_level_and_immediate() {
        let mut app = App::new();
        let id = app.store.add("a").unwrap();
        app.delete_task(id);

        // Store change is synchronous; only the ghost lingers.
        assert_eq!(app.stats().total, 0);
        assert_eq!(app.ghosts.len(), 1);
        assert_eq!(app.ghosts[0].text, "a");
    }

    #[test]
    fn test_ghost_expires_on_ticks() {
        let mut app = App::new();
        let id = app.store.add("a").unwrap();
        app.delete_task(id);

        for _ in 0..GHOST_TICKS {
            app.tick();
        }
        assert!(app.ghosts.is_empty(), "ghost should expire");
        assert_eq!(app.stats().total, 0, "tick must not touch the store");
    }

    #[test]
    fn test_stat_pulse_on_change_only() {
        let mut app = App::new();
        app.store.add("a").unwrap();
        app.submit_input(); // empty input: rejected, stats unchanged

        // total changed from 0 only when refresh saw the first add
        assert_eq!(app.stat_pulses.total, STAT_PULSE_TICKS);
        // completed never changed from 0
        assert_eq!(app.stat_pulses.completed, 0);
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut app = App::new();
        app.store.add("a").unwrap();

        app.request_clear_all();
        assert!(app.confirming_clear_all);
        assert_eq!(app.stats().total, 1, "nothing removed before confirm");

        app.confirm_clear_all();
        assert!(!app.confirming_clear_all);
        assert_eq!(app.stats().total, 0);
    }

    #[test]
    fn test_clear_all_skips_prompt_when_empty() {
        let mut app = App::new();
        app.request_clear_all();
        assert!(!app.confirming_clear_all);
    }

    #[test]
    fn test_selection_clamps_after_filter_change() {
        let mut app = App::new();
        let a = app.store.add("a").unwrap();
        app.store.add("b").unwrap();
        app.store.add("c").unwrap();
        app.selected = 2;

        app.store.toggle(a);
        app.set_filter(Filter::Completed);
        assert_eq!(app.selected, 0, "selection clamped to visible rows");
    }
}
