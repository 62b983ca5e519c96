//! Error types for taskdeck.
//!
//! The error surface here is deliberately small: there are no network or
//! persistence paths, so the only fallible territory is terminal I/O and
//! logging setup. Store operations never fail - unknown ids are silent
//! no-ops and rejected input is signaled in-band, not as an error.

use thiserror::Error;

/// Unified error type for the application.
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// Terminal or log-file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl TaskdeckError {
    /// Short message suitable for showing the user after the TUI is torn
    /// down.
    pub fn user_message(&self) -> String {
        match self {
            TaskdeckError::Io(e) => format!("I/O failure: {e}"),
            TaskdeckError::Logging(msg) => format!("Could not set up logging: {msg}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type TaskdeckResult<T> = Result<T, TaskdeckError>;
