//! Color theme constants for the taskdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Active/remaining tasks - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Completed tasks - gray, struck through
pub const COLOR_DONE: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row highlight
pub const COLOR_SELECTED: Color = Color::Cyan;

/// Stat value mid-pulse - the brief emphasis after a value change
pub const COLOR_STAT_PULSE: Color = Color::LightCyan;

/// Rejected-input border flash and destructive prompts
pub const COLOR_ERROR: Color = Color::Red;

/// Ghost rows fading out after deletion
pub const COLOR_GHOST: Color = Color::DarkGray;
