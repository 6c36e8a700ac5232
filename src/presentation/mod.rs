//! Presentation layer with UI components and event handling.

/// Key bindings and UI commands.
pub mod commands;
/// Event handling.
pub mod events;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
