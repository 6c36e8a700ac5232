//! Dataset source adapters.

mod file_source;
mod http_source;

pub use file_source::FileDatasetSource;
pub use http_source::HttpDatasetSource;
