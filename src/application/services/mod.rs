//! Stateless application services.

pub mod contact;
pub mod formatting;
pub mod listing_parser;
pub mod numeric;
pub mod url_normalizer;

pub use contact::{ContactForm, ContactFormError, contact_link};
pub use formatting::{format_area, format_price};
pub use listing_parser::parse_listings;
pub use url_normalizer::normalize_image_url;
