//! Terminal event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Ignored,
    /// Event produced a command or changed state; redraw.
    Redraw,
    /// Exit application.
    Exit,
}

/// Filters raw terminal events.
pub struct EventHandler;

impl EventHandler {
    /// Returns the key event if `event` is a key press.
    ///
    /// Release and repeat events are dropped so a single physical key press
    /// maps to a single command on every platform.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// Returns true when the terminal was resized and needs a redraw.
    #[must_use]
    pub const fn is_resize(event: &Event) -> bool {
        matches!(event, Event::Resize(..))
    }
}
