//! Text-input coercion.
//!
//! Form fields are free text. These functions turn that text into payload
//! values and never fail: input they cannot use becomes "unset" (`None`) or is
//! dropped.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Inclusive bounds of the warmth scale.
pub const WARMTH_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Split a comma-separated field into its entries.
///
/// Entries are trimmed and empty ones are discarded, so re-joining the result
/// with `,` and splitting again yields the same list.
///
/// ```
/// use mazzura_core::parse::split_list;
///
/// assert_eq!(split_list(" black, lilac ,,sage "), vec!["black", "lilac", "sage"]);
/// assert!(split_list("").is_empty());
/// ```
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a finite number, or `None` for empty or non-numeric text.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a price, or `None` for empty or non-numeric text.
#[must_use]
pub fn parse_price(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parse a warmth rating on the 0-10 scale, or `None` when outside it.
#[must_use]
pub fn parse_warmth(input: &str) -> Option<f64> {
    parse_number(input).filter(|n| WARMTH_RANGE.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(split_list("red, blue"), vec!["red", "blue"]);
        assert_eq!(split_list("  ,  , "), Vec::<String>::new());
        assert_eq!(split_list("street,monochrome,"), vec!["street", "monochrome"]);
    }

    #[test]
    fn test_split_list_is_idempotent() {
        let inputs = [
            "",
            "a",
            " a , b ",
            ",,,x,,",
            "black, lilac, sage",
            "  spaced  words , and\ttabs ",
            "ümlaut, 漢字 ,emoji 👗",
        ];
        for input in inputs {
            let once = split_list(input);
            let twice = split_list(&once.join(","));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_parse_number_empty_is_unset() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn test_parse_number_rejects_garbage_and_nan() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_number_accepts_decimals() {
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number("0"), Some(0.0));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1299"), Some(Decimal::from(1299)));
        assert_eq!(parse_price("19.99"), Decimal::from_str("19.99").ok());
        assert_eq!(parse_price("1e3"), Some(Decimal::from(1000)));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("cheap"), None);
    }

    #[test]
    fn test_parse_warmth_range() {
        assert_eq!(parse_warmth("3"), Some(3.0));
        assert_eq!(parse_warmth("10"), Some(10.0));
        assert_eq!(parse_warmth("11"), None);
        assert_eq!(parse_warmth("-1"), None);
        assert_eq!(parse_warmth(""), None);
    }
}
