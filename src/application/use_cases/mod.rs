//! Use case implementations.

mod load_listings_use_case;

pub use load_listings_use_case::LoadListingsUseCase;
