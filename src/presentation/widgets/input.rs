//! Single-line text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::commands::TextEdit;

/// Text input field. The cursor counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing operation.
    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            TextEdit::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            TextEdit::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            TextEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            TextEdit::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            TextEdit::Home => self.cursor = 0,
            TextEdit::End => self.cursor = self.char_count(),
            TextEdit::Clear => self.clear(),
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Display column of the cursor.
    fn cursor_column(&self) -> usize {
        self.value[..self.byte_index(self.cursor)].width()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let column = self.cursor_column();
        let width = usize::from(inner.width);
        #[allow(clippy::cast_possible_truncation)]
        let scroll = column.saturating_sub(width.saturating_sub(1)) as u16;

        let display = if self.value.is_empty() {
            self.placeholder.as_str()
        } else {
            self.value.as_str()
        };
        Paragraph::new(display)
            .style(text_style)
            .scroll((0, scroll))
            .render(inner, buf);

        if self.focused {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + (column as u16).saturating_sub(scroll);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.apply(TextEdit::Insert(c));
        }
    }

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Busca");
        assert!(input.value().is_empty());

        type_text(&mut input, "ab");
        assert_eq!(input.value(), "ab");

        input.apply(TextEdit::Backspace);
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Busca");
        type_text(&mut input, "São");

        input.apply(TextEdit::Left);
        input.apply(TextEdit::Backspace);
        assert_eq!(input.value(), "So");

        input.apply(TextEdit::Insert('ã'));
        assert_eq!(input.value(), "São");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_home_end_delete() {
        let mut input = TextInput::new("Preço");
        for c in "1500".chars() {
            input.apply(TextEdit::Insert(c));
        }

        input.apply(TextEdit::Home);
        input.apply(TextEdit::Delete);
        assert_eq!(input.value(), "500");

        input.apply(TextEdit::End);
        input.apply(TextEdit::Insert('0'));
        assert_eq!(input.value(), "5000");

        input.apply(TextEdit::Clear);
        assert!(input.value().is_empty());
    }
}
