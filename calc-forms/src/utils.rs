use std::fmt;

use calc_core::Sex;
use rust_decimal::Decimal;
use tracing::warn;

/// Normalizes raw field text: trims whitespace and removes commas
/// (thousands separator).
fn normalize_field_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses raw field text into an optional [`Decimal`].
///
/// Handles comma as thousands separator. Returns `None` for empty or
/// whitespace-only input (the blank-field sentinel), or when parsing fails
/// (logs a warning on parse failure).
pub fn parse_field(s: &str) -> Option<Decimal> {
    let normalized = normalize_field_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                warn!(input = %s, "invalid numeric field: {}", e);
                None
            },
            Some,
        )
    }
}

/// Parses raw field text into an optional whole-year age.
///
/// Same contract as [`parse_field`]: `None` for blank input, `None` plus a
/// warning for anything that is not a non-negative integer.
pub fn parse_age(s: &str) -> Option<u32> {
    let normalized = normalize_field_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                warn!(input = %s, "invalid age field: {}", e);
                None
            },
            Some,
        )
    }
}

/// Parses raw field text into an optional [`Sex`].
pub fn parse_sex(s: &str) -> Option<Sex> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = Sex::parse(trimmed);
    if parsed.is_none() {
        warn!(input = %s, "unrecognized sex");
    }
    parsed
}

/// Parses raw free-text input, treating blank as unset.
pub fn parse_text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats an amount with exactly two decimal places.
pub fn format_amount(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Formats an optional result amount for display, using the `0.00`
/// placeholder when the result is absent.
pub fn display_or_placeholder(value: Option<Decimal>) -> String {
    value.map(format_amount).unwrap_or_else(|| "0.00".to_string())
}

/// Formats an optional input field for display, using "—" when unset.
pub fn opt_display<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}
