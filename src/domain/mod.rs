//! Domain layer with core entities, query types and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Filter and sort query types.
pub mod query;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{FavoriteSet, Listing, ListingId};
pub use errors::{LoadError, StorageError};
pub use ports::{DatasetSource, KeyValueStore};
pub use query::{ListingQuery, PriceRange, SortMode};
