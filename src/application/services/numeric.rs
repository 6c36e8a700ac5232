//! Lenient number parsing for spreadsheet cells and form inputs.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Parses the longest numeric prefix of `input`, ignoring leading whitespace.
///
/// Trailing garbage is ignored (`"12abc"` is `12`) and a value without any
/// numeric prefix yields `None`. Thousands separators are not understood:
/// `"1.500.000"` reads as `1.5`.
#[must_use]
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let candidate = LEADING_FLOAT_RE.find(input.trim_start())?;
    candidate
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Parses a numeric cell, mapping anything unusable to `0`.
#[must_use]
pub fn parse_number_or_zero(input: &str) -> f64 {
    parse_leading_float(input).unwrap_or(0.0)
}

/// Parses a price bound typed by the user.
///
/// Empty, unparsable and zero inputs mean "no bound".
#[must_use]
pub fn parse_price_bound(input: &str) -> Option<f64> {
    parse_leading_float(input).filter(|value| *value != 0.0)
}
