//! Display formatting for prices and areas.

/// Currency symbol for Brazilian real.
const CURRENCY_SYMBOL: &str = "R$";

/// Separator between symbol and amount. Brazilian locale uses a no-break space.
const SYMBOL_SEPARATOR: char = '\u{a0}';

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Unit label appended to areas.
pub const AREA_UNIT: &str = "m²";

/// Formats a price in the pt-BR currency style, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };

    if price.is_nan() {
        return format!("{CURRENCY_SYMBOL}{SYMBOL_SEPARATOR}NaN");
    }
    if price.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}{SYMBOL_SEPARATOR}∞");
    }

    // Fixed-point formatting keeps every integer digit of large amounts.
    let fixed = format!("{:.2}", price.abs());
    let (units, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!(
        "{sign}{CURRENCY_SYMBOL}{SYMBOL_SEPARATOR}{}{DECIMAL_SEPARATOR}{fraction}",
        group_thousands(units)
    )
}

/// Formats an area with its unit label, e.g. `85.5 m²`.
#[must_use]
pub fn format_area(area: f64) -> String {
    format!("{area} {AREA_UNIT}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}
