use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::theme;

/// Single-line text input with cursor handling and horizontal scrolling.
///
/// Cursor position is a character index; editing operations translate to
/// byte offsets internally so multi-byte input behaves correctly.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position as a character index into `content`.
    cursor: usize,
    /// First visible character when the text overflows the widget.
    scroll_offset: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor (Delete).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Clear all content and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Visible window of the content for a given inner width, keeping the
    /// cursor in view.
    fn visible_window(&self, inner_width: usize) -> (String, usize) {
        let mut scroll = self.scroll_offset;
        if inner_width > 0 {
            if self.cursor < scroll {
                scroll = self.cursor;
            }
            if self.cursor >= scroll + inner_width {
                scroll = self.cursor - inner_width + 1;
            }
        }
        let visible: String = self
            .content
            .chars()
            .skip(scroll)
            .take(inner_width)
            .collect();
        (visible, scroll)
    }

    /// Render into `buf` with a titled border.
    ///
    /// `flash` overrides the border with the error color - used for the
    /// rejected-input cue.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        flash: bool,
    ) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let border_color = if flash {
            theme::COLOR_ERROR
        } else if focused {
            theme::COLOR_SELECTED
        } else {
            theme::COLOR_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width as u16,
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let (visible, scroll) = self.visible_window(inner_width);
        buf.set_string(
            inner_area.x,
            inner_area.y,
            &visible,
            Style::default().fg(theme::COLOR_ACCENT),
        );

        if focused {
            let cursor_x = (self.cursor - scroll) as u16;
            if (cursor_x as usize) < inner_width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                let cursor_style = Style::default().fg(Color::Black).bg(theme::COLOR_SELECTED);
                buf.set_string(
                    inner_area.x + cursor_x,
                    inner_area.y,
                    cursor_char.to_string(),
                    cursor_style,
                );
            }
        }
    }
}

/// Renderable wrapper implementing the `Widget` trait.
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    flash: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool, flash: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
            flash,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused, self.flash);
    }
}
