//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file under the user's data
//! directory (`~/.local/share/taskdeck/taskdeck.log` on Linux). Filtering
//! follows the usual `RUST_LOG` conventions via `EnvFilter`; the default
//! level is `info`.

use std::fs::{create_dir_all, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{TaskdeckError, TaskdeckResult};

const LOG_FILE: &str = "taskdeck.log";

/// Resolve the log file path, creating parent directories as needed.
fn log_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("taskdeck");
    create_dir_all(&dir).ok()?;
    Some(dir.join(LOG_FILE))
}

/// Install the global tracing subscriber.
///
/// If no writable data directory exists the app runs without logging
/// rather than failing startup.
pub fn init() -> TaskdeckResult<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TaskdeckError::Logging(e.to_string()))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
