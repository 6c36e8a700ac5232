//! Domain entity definitions.

mod favorites;
mod listing;

pub use favorites::FavoriteSet;
pub use listing::{Listing, ListingId};
