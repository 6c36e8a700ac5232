//! Delimited text to listing records.
//!
//! The published sheet is comma separated with a header row. Quoting is
//! handled with a line-local heuristic: a comma splits fields only when an
//! even number of `"` characters follows it on the same line. There is no
//! support for escaped quotes or fields spanning several lines.
//!
//! Parsing never fails. Bad cells degrade to `None`, `0` or an empty list and
//! the row is still produced.

use tracing::debug;

use super::numeric::parse_number_or_zero;
use super::url_normalizer::normalize_image_url;
use crate::domain::entities::{Listing, ListingId};

const LIST_SEPARATOR: char = ';';
const NULL_LITERAL: &str = "null";

/// Column recognized by the parser, keyed by header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    Title,
    Location,
    City,
    State,
    Description,
    Agent,
    Phone,
    Email,
    TransactionType,
    PropertyType,
    Badge,
    Price,
    Bedrooms,
    Bathrooms,
    Area,
    Images,
    Features,
    Unknown,
}

impl Column {
    fn from_header(name: &str) -> Self {
        match name {
            "id" => Self::Id,
            "title" => Self::Title,
            "location" => Self::Location,
            "city" => Self::City,
            "state" => Self::State,
            "description" => Self::Description,
            "agent" => Self::Agent,
            "phone" => Self::Phone,
            "email" => Self::Email,
            "transactionType" => Self::TransactionType,
            "propertyType" => Self::PropertyType,
            "badge" => Self::Badge,
            "price" => Self::Price,
            "bedrooms" => Self::Bedrooms,
            "bathrooms" => Self::Bathrooms,
            "area" => Self::Area,
            "images" => Self::Images,
            "features" => Self::Features,
            _ => Self::Unknown,
        }
    }

    fn apply(self, listing: &mut Listing, value: &str) {
        match self {
            Self::Id => listing.id = ListingId::new(parse_number_or_zero(value)),
            Self::Price => listing.price = parse_number_or_zero(value),
            Self::Bedrooms => listing.bedrooms = parse_number_or_zero(value),
            Self::Bathrooms => listing.bathrooms = parse_number_or_zero(value),
            Self::Area => listing.area = parse_number_or_zero(value),
            Self::Images => listing.images = parse_images(value),
            Self::Features => listing.features = parse_features(value),
            Self::Title => listing.title = optional_text(value),
            Self::Location => listing.location = optional_text(value),
            Self::City => listing.city = optional_text(value),
            Self::State => listing.state = optional_text(value),
            Self::Description => listing.description = optional_text(value),
            Self::Agent => listing.agent = optional_text(value),
            Self::Phone => listing.phone = optional_text(value),
            Self::Email => listing.email = optional_text(value),
            Self::TransactionType => listing.transaction_type = optional_text(value),
            Self::PropertyType => listing.property_type = optional_text(value),
            Self::Badge => listing.badge = optional_text(value),
            Self::Unknown => {}
        }
    }
}

/// Parses the whole dataset. The first line is the header.
#[must_use]
pub fn parse_listings(text: &str) -> Vec<Listing> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let columns: Vec<Column> = header_line
        .split(',')
        .map(|name| Column::from_header(name.trim()))
        .collect();

    if columns.iter().any(|c| *c == Column::Unknown) {
        debug!(header = %header_line.trim(), "Ignoring unrecognized columns");
    }

    // Blank lines inside the data become rows with every field defaulted.
    let listings: Vec<Listing> = lines.map(|line| parse_row(&columns, line)).collect();

    debug!(count = listings.len(), "Parsed listings");
    listings
}

fn parse_row(columns: &[Column], line: &str) -> Listing {
    let values = split_row(line);
    let mut listing = Listing::default();

    for (index, column) in columns.iter().enumerate() {
        let raw = values.get(index).copied().unwrap_or_default();
        column.apply(&mut listing, clean_field(raw));
    }

    listing
}

/// Splits a line on commas followed by an even number of quotes.
fn split_row(line: &str) -> Vec<&str> {
    let total_quotes = line.matches('"').count();
    let mut fields = Vec::new();
    let mut quotes_seen = 0;
    let mut start = 0;

    for (pos, ch) in line.char_indices() {
        match ch {
            '"' => quotes_seen += 1,
            ',' if (total_quotes - quotes_seen) % 2 == 0 => {
                fields.push(&line[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);
    fields
}

/// Trims a cell and strips any run of surrounding quotes.
fn clean_field(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() || value == NULL_LITERAL {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_images(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }

    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .map(|piece| normalize_image_url(piece).unwrap_or_else(|| piece.to_string()))
        .filter(|url| !url.is_empty() && url != NULL_LITERAL)
        .collect()
}

fn parse_features(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }

    value
        .split(LIST_SEPARATOR)
        .map(|piece| piece.trim().to_string())
        .collect()
}
