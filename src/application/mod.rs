//! Application layer with services, state and use cases.

/// Stateless services: parsing, normalization, formatting.
pub mod services;
/// Listing and favorites state.
pub mod store;
/// Use case implementations.
pub mod use_cases;

pub use store::{FavoritesRepository, ListingStore};
pub use use_cases::LoadListingsUseCase;
