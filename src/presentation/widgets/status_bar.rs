//! Status line widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Transient message shown above the hint bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// One-line bar with a message on the left and a summary on the right.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    right: String,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>) -> Self {
        Self {
            message,
            right: String::new(),
        }
    }

    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let right_width = self.right.width();

        let mut spans = Vec::new();
        let mut used = 0;

        if let Some(message) = self.message {
            let style = Style::default()
                .fg(message.level.color())
                .add_modifier(Modifier::BOLD);
            used = message.text.width();
            spans.push(Span::styled(message.text.as_str(), style));
        }

        let padding = width.saturating_sub(used + right_width);
        if padding > 0 && !self.right.is_empty() {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                self.right.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
