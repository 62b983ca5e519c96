//! Taskdeck - a terminal task list.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod store;
pub mod text;
pub mod theme;
pub mod ui;
pub mod widgets;
