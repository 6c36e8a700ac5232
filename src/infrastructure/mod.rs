//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Listing dataset sources.
pub mod dataset;
/// Durable key-value storage.
pub mod kv;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use dataset::{FileDatasetSource, HttpDatasetSource};
pub use kv::FileKeyValueStore;
