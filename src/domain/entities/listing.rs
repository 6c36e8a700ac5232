//! Property listing entity.

use serde::{Deserialize, Serialize};

/// Identifier of a listing.
///
/// Source data carries ids as arbitrary numbers, so the value keeps float
/// semantics. Uniqueness is not enforced: two rows with the same id match the
/// same favorite entry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct ListingId(#[serde(with = "crate::domain::serde_utils::integral_number")] f64);

impl ListingId {
    /// Creates an id from its numeric value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for ListingId {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for ListingId {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

/// One property record produced from a data row.
///
/// Text fields are `None` when the source cell was empty or the literal
/// `null`. Numeric fields fall back to `0.0` when missing or unparsable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub agent: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub transaction_type: Option<String>,
    pub property_type: Option<String>,
    pub badge: Option<String>,
    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub area: f64,
    /// Image URLs, already normalized for direct display.
    pub images: Vec<String>,
    pub features: Vec<String>,
}

impl Listing {
    /// Creates an empty listing with the given id.
    #[must_use]
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the price.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the transaction type.
    #[must_use]
    pub fn with_transaction_type(mut self, kind: impl Into<String>) -> Self {
        self.transaction_type = Some(kind.into());
        self
    }

    /// Sets the property type.
    #[must_use]
    pub fn with_property_type(mut self, kind: impl Into<String>) -> Self {
        self.property_type = Some(kind.into());
        self
    }

    /// Returns the title, or an empty string.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns the location, or an empty string.
    #[must_use]
    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Returns whether the features list has displayable content.
    ///
    /// A list whose first entry is empty is treated as having none.
    #[must_use]
    pub fn has_features(&self) -> bool {
        self.features.first().is_some_and(|first| !first.is_empty())
    }

    /// Returns "city, state" with missing parts left out.
    #[must_use]
    pub fn city_and_state(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }
}
