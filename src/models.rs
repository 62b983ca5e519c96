//! Core data types for the task list.
//!
//! - [`Task`] - a single user-entered task
//! - [`TaskStats`] - the total/completed/remaining readout
//! - [`Filter`] - view-only visibility rule for the task list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task in the list.
///
/// `id`, `text` and `created_at` are fixed at creation; only `completed`
/// ever changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique id, allocated from a monotonic counter. Never reused.
    pub id: u64,
    /// Display text, trimmed and non-empty.
    pub text: String,
    /// Completion flag, toggled by user action.
    pub completed: bool,
    /// When the task was created. Recorded but not used for ordering.
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Snapshot of the list statistics.
///
/// Invariant: `completed + remaining == total`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Which tasks the list currently shows.
///
/// Purely presentational: the store is never consulted or mutated when the
/// filter changes, and `stats()` ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task is visible under this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Cycle order used by the filter keybind: All -> Active -> Completed.
    pub fn next(&self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Label shown in the list title and footer.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}
