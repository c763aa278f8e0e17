//! Monetary damage normalization.
//!
//! NOAA storm files encode damage amounts inconsistently: plain numbers
//! ("5000"), currency strings ("$123.45"), and magnitude-suffixed strings
//! ("2M", "1.5B"). [`parse_damage`] converts any of these to base US
//! dollars.

use crate::error::{Result, StormError};

/// Multipliers for the magnitude suffixes used in the damage columns.
const SUFFIX_MULTIPLIERS: [(char, f64); 3] = [('B', 1e9), ('M', 1e6), ('K', 1e3)];

/// Convert one raw damage cell to base US dollars.
///
/// An empty cell means no amount was recorded and maps to `Ok(None)`;
/// sums treat it as zero. Surrounding whitespace and a leading `$` are
/// stripped before the suffix check, so `"$1.2M"` parses as `1.2e6`.
///
/// # Examples
///
/// ```
/// use storm_core::damage::parse_damage;
///
/// assert_eq!(parse_damage("1.5B").unwrap(), Some(1.5e9));
/// assert_eq!(parse_damage("$123.45").unwrap(), Some(123.45));
/// assert_eq!(parse_damage("").unwrap(), None);
/// ```
pub fn parse_damage(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let body = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    for (suffix, multiplier) in SUFFIX_MULTIPLIERS {
        if let Some(number) = body.strip_suffix(suffix) {
            return Ok(Some(parse_number(number, raw)? * multiplier));
        }
    }

    parse_number(body, raw).map(Some)
}

fn parse_number(text: &str, raw: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| StormError::DamageParse(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> f64 {
        parse_damage(raw).unwrap().unwrap()
    }

    #[test]
    fn test_billions_suffix() {
        assert_eq!(value("1.5B"), 1.5e9);
    }

    #[test]
    fn test_millions_suffix() {
        assert_eq!(value("2M"), 2.0e6);
    }

    #[test]
    fn test_thousands_suffix() {
        assert_eq!(value("500K"), 500e3);
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(value("$123.45"), 123.45);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(value("1000"), 1000.0);
    }

    #[test]
    fn test_currency_prefix_with_suffix() {
        // The $ strip runs first, so the suffix still applies.
        assert_eq!(value("$1.2M"), 1.2e6);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(value("  $500K "), 500e3);
    }

    #[test]
    fn test_empty_cell_is_none() {
        assert_eq!(parse_damage("").unwrap(), None);
        assert_eq!(parse_damage("   ").unwrap(), None);
    }

    #[test]
    fn test_plain_matches_suffix_free_float() {
        for raw in ["0", "17", "123.45", "0.02"] {
            let expected: f64 = raw.parse().unwrap();
            assert_eq!(value(raw), expected);
        }
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(parse_damage("unknown").is_err());
        assert!(parse_damage("1.2X").is_err());
        assert!(parse_damage("$").is_err());
    }

    #[test]
    fn test_error_carries_raw_text() {
        let err = parse_damage("12abcM").unwrap_err();
        assert!(err.to_string().contains("12abcM"));
    }
}
