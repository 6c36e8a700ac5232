//! Listing state owned by the application.

mod favorites_repository;
mod listing_store;

pub use favorites_repository::{FAVORITES_KEY, FavoritesRepository};
pub use listing_store::ListingStore;
