//! UI screens.

mod app;
mod contact_screen;
mod detail_view;
mod listings_screen;
pub mod utils;

pub use app::{App, LinkOpener};
pub use contact_screen::{ContactField, ContactScreen, ContactScreenState};
pub use detail_view::{DetailState, DetailView};
pub use listings_screen::{ListingsScreen, ListingsScreenState};
