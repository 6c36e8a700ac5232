//! Homedeck - A terminal browser for published real-estate listings.
//!
//! This crate fetches a listing sheet once at startup, parses it into typed
//! records and lets the user filter, sort, favorite and inspect listings in a
//! ratatui interface. Favorites persist in a small key-value file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, listing state and use cases.
pub mod application;
/// Domain layer containing entities, query types, errors and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration, dataset and storage adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "homedeck";
