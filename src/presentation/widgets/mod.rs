mod footer_bar;
mod header_bar;
mod input;
mod listing_list;
mod status_bar;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{DatasetStatus, HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use listing_list::{CardSelection, ListingList, favorite_marker, measurement_labels};
pub use status_bar::{StatusBar, StatusLevel, StatusMessage};
