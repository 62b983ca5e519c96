//! The task store: owner of the authoritative task sequence.
//!
//! All mutations to the task list go through [`TaskStore`]. The store is a
//! plain owned struct held by the `App` - no globals, no locking, mutated
//! only on the single control thread of the event loop.
//!
//! Operations referencing an id that no longer exists are silent no-ops;
//! the only rejected input is empty (or whitespace-only) task text on
//! [`TaskStore::add`].

use tracing::debug;

use crate::models::{Task, TaskStats};

/// Ordered task sequence plus the monotonic id counter.
///
/// Ids are unique and strictly increasing for the lifetime of the process;
/// a deleted task's id is never reassigned. Insertion order is preserved
/// and there is no reordering operation.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task from raw input text.
    ///
    /// The text is trimmed; if nothing remains the store is untouched and
    /// `None` is returned so the caller can show a rejection cue. On
    /// success the new task's id is returned.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, trimmed.to_string()));
        debug!(id, "task added");
        Some(id)
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// Unknown ids are ignored.
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            debug!(id, completed = task.completed, "task toggled");
        }
    }

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!(id, "task removed");
        }
    }

    /// Remove every completed task.
    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
    }

    /// Remove every task. Destructive and irreversible; callers are
    /// expected to confirm intent with the user first.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
    }

    /// Read-only view of the current sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Compute the statistics readout by linear scan.
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            completed,
            remaining: total - completed,
        }
    }
}
