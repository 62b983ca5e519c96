//! UI rendering for the taskdeck terminal interface.
//!
//! The whole frame is rebuilt from store state on every draw - there is no
//! incremental diffing. Layout, top to bottom:
//! - Header with the app title and active filter
//! - Input box for new tasks
//! - Task list (or the empty-state placeholder)
//! - Statistics bar with per-field change pulses
//! - Footer keybind hints
//!
//! Task text passes through [`crate::text::sanitize`] before it reaches a
//! widget, so control bytes and markup render as literal glyphs.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};
use crate::models::Task;
use crate::text::sanitize;
use crate::theme::*;
use crate::widgets::InputBoxWidget;

const EMPTY_STATE_TITLE: &str = "No tasks yet";
const EMPTY_STATE_HINT: &str = "Add your first task above to get started!";

/// Render the complete UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // input
            Constraint::Min(3),    // task list
            Constraint::Length(3), // stats
            Constraint::Length(1), // footer
        ])
        .split(size);

    render_header(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_task_list(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);

    if app.confirming_clear_all {
        render_confirm_modal(frame, size);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " TASKDECK ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", app.filter.label()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let widget = InputBoxWidget::new(&app.input, " New Task ", focused, app.input_flash > 0);
    frame.render_widget(widget, area);
}

fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" Tasks · {} ", app.filter.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let visible = app.visible_tasks();
    if visible.is_empty() && app.ghosts.is_empty() {
        render_empty_state(frame, inner);
        return;
    }

    let width = inner.width as usize;
    let list_focused = app.focus == Focus::List;

    // Build one line per visible row, with ghost rows of just-deleted
    // tasks interleaved near their old positions.
    let mut lines: Vec<Line> = Vec::with_capacity(visible.len() + app.ghosts.len());
    let mut selected_line = 0;
    for (i, task) in visible.iter().copied().enumerate() {
        let selected = list_focused && i == app.selected;
        if selected {
            selected_line = lines.len();
        }
        lines.push(task_line(task, selected, width));
    }
    for ghost in &app.ghosts {
        let at = ghost.index.min(lines.len());
        lines.insert(at, ghost_line(ghost.text.as_str(), ghost.completed, width));
        if at <= selected_line && list_focused {
            selected_line += 1;
        }
    }

    // Window the lines so the selected row stays in view.
    let height = inner.height as usize;
    let start = if selected_line >= height {
        selected_line + 1 - height
    } else {
        0
    };
    let windowed: Vec<Line> = lines.into_iter().skip(start).take(height).collect();
    frame.render_widget(Paragraph::new(windowed), inner);
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let pad = area.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::default(); pad as usize];
    lines.push(Line::from(Span::styled(
        EMPTY_STATE_TITLE,
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        EMPTY_STATE_HINT,
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// One row of the task list: selection marker, checkbox, text, time.
fn task_line<'a>(task: &'a Task, selected: bool, width: usize) -> Line<'a> {
    let marker = if selected { "❯ " } else { "  " };
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let time = task.created_at.format(" · %H:%M").to_string();

    let text_cols = width
        .saturating_sub(marker.width() + checkbox.width())
        .saturating_sub(time.chars().count());
    let text = truncate_to_width(&sanitize(&task.text), text_cols);

    let text_style = if task.completed {
        Style::default()
            .fg(COLOR_DONE)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    let marker_style = if selected {
        Style::default().fg(COLOR_SELECTED)
    } else {
        Style::default()
    };
    let checkbox_style = if task.completed {
        Style::default().fg(COLOR_DONE)
    } else {
        Style::default().fg(COLOR_ACTIVE)
    };

    Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(checkbox, checkbox_style),
        Span::styled(text, text_style),
        Span::styled(time, Style::default().fg(COLOR_DIM)),
    ])
}

/// Fading remnant of a deleted row.
fn ghost_line(text: &str, completed: bool, width: usize) -> Line<'static> {
    let checkbox = if completed { "  [x] " } else { "  [ ] " };
    let text = truncate_to_width(&sanitize(text), width.saturating_sub(checkbox.len()));
    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(COLOR_GHOST)),
        Span::styled(
            text,
            Style::default()
                .fg(COLOR_GHOST)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        ),
    ])
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Stats ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        stat_span("Total", stats.total, app.stat_pulses.total > 0),
        Span::raw("   "),
        stat_span("Completed", stats.completed, app.stat_pulses.completed > 0),
        Span::raw("   "),
        stat_span("Remaining", stats.remaining, app.stat_pulses.remaining > 0),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// One field of the stats readout. A field whose value just changed gets
/// the pulse color and bold emphasis for a few ticks.
fn stat_span(label: &str, value: usize, pulsing: bool) -> Span<'static> {
    let style = if pulsing {
        Style::default()
            .fg(COLOR_STAT_PULSE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    Span::styled(format!("{label}: {value}"), style)
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Input => " Enter add · Tab list · Ctrl+C quit",
        Focus::List => {
            " ↑↓ move · Space toggle · d delete · f filter · c clear done · C clear all · Tab input · q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}

fn render_confirm_modal(frame: &mut Frame, size: Rect) {
    let area = centered_rect(40, 5, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(" Confirm ");
    let text = vec![
        Line::from("Delete all tasks?"),
        Line::from(Span::styled(
            "y: delete · n: cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Centered rect of fixed size, clamped to the frame.
fn centered_rect(width: u16, height: u16, frame: Rect) -> Rect {
    let w = width.min(frame.width);
    let h = height.min(frame.height);
    Rect {
        x: frame.x + (frame.width - w) / 2,
        y: frame.y + (frame.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Truncate to a display-column limit, appending an ellipsis if cut.
fn truncate_to_width(text: &str, max_cols: usize) -> String {
    let mut cols = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if cols + w > max_cols {
            // Swap the last character for an ellipsis if there is room.
            if max_cols > 0 {
                out.pop();
                out.push('…');
            }
            return out;
        }
        cols += w;
        out.push(c);
    }
    out
}
