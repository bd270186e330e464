//! Read-side coercion of property values into primitive types.

use crate::error::{ParseResult, PropertiesError};

/// Parse a boolean value (true/false/on/off/yes/no/1/0)
pub fn parse_bool(s: &str) -> ParseResult<bool> {
    match s.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(PropertiesError::invalid_bool(s)),
    }
}

/// Parse an integer (decimal or hex)
pub fn parse_int(s: &str) -> ParseResult<i64> {
    if let Some(hex) = s.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
            .map_err(|_| PropertiesError::invalid_number(s, "invalid hex integer"))
    } else {
        s.parse::<i64>()
            .map_err(|_| PropertiesError::invalid_number(s, "invalid integer"))
    }
}

/// Parse a float
pub fn parse_float(s: &str) -> ParseResult<f64> {
    s.parse::<f64>()
        .map_err(|_| PropertiesError::invalid_number(s, "invalid float"))
}

/// Split a comma-separated value into trimmed elements.
///
/// An empty or whitespace-only value is an empty list.
pub fn parse_list(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(|part| part.trim().to_string()).collect()
}
