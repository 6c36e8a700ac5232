//! Listing filter and sort query.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::entities::Listing;

/// Result ordering for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Order in which listings appear in the dataset.
    #[default]
    #[serde(rename = "newest")]
    DatasetOrder,
    /// Cheapest first.
    #[serde(rename = "price-asc")]
    PriceAscending,
    /// Most expensive first.
    #[serde(rename = "price-desc")]
    PriceDescending,
}

impl SortMode {
    /// Returns the next mode, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::DatasetOrder => Self::PriceAscending,
            Self::PriceAscending => Self::PriceDescending,
            Self::PriceDescending => Self::DatasetOrder,
        }
    }

    /// Sorts listings in place. The sort is stable.
    pub fn apply(self, listings: &mut [&Listing]) {
        match self {
            Self::DatasetOrder => {}
            Self::PriceAscending => listings.sort_by(|a, b| compare_price(a, b)),
            Self::PriceDescending => listings.sort_by(|a, b| compare_price(b, a)),
        }
    }
}

fn compare_price(a: &Listing, b: &Listing) -> Ordering {
    a.price.total_cmp(&b.price)
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetOrder => write!(f, "Mais recentes"),
            Self::PriceAscending => write!(f, "Menor preço"),
            Self::PriceDescending => write!(f, "Maior preço"),
        }
    }
}

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Creates a range from optional bounds; missing bounds default to
    /// `0` and `+∞`.
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns whether the price lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Filter and sort parameters for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Case-insensitive substring matched against title or location.
    pub search: String,
    pub transaction_type: Option<String>,
    pub property_type: Option<String>,
    pub price: PriceRange,
    pub sort: SortMode,
}

impl ListingQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_transaction_type(mut self, kind: impl Into<String>) -> Self {
        self.transaction_type = non_empty(kind.into());
        self
    }

    #[must_use]
    pub fn with_property_type(mut self, kind: impl Into<String>) -> Self {
        self.property_type = non_empty(kind.into());
        self
    }

    #[must_use]
    pub const fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Restores every filter to its default, keeping nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns whether the listing passes every filter of this query.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && matches_category(self.transaction_type.as_deref(), listing.transaction_type.as_deref())
            && matches_category(self.property_type.as_deref(), listing.property_type.as_deref())
            && self.price.contains(listing.price)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        listing.title_or_empty().to_lowercase().contains(&needle)
            || listing.location_or_empty().to_lowercase().contains(&needle)
    }
}

fn matches_category(filter: Option<&str>, value: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(expected) => value == Some(expected),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
