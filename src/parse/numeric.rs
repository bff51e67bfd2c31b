//! Integer and float option parsers
//!
//! Both parsers validate the format first and only then apply the inclusive
//! `[min, max]` range check. Format validation requires the canonical
//! spelling: re-stringifying the parsed number must reproduce the trimmed
//! input, which rejects scientific notation, redundant leading zeros and
//! similar non-canonical spellings.

use crate::error::{ParseError, ParseResult};

/// Parse an integer in canonical decimal form, without any range constraint.
pub fn parse_canonical_i64(raw: &str) -> ParseResult<i64> {
    let invalid = || ParseError::InvalidFormat {
        raw: raw.to_string(),
        expected: "integer",
    };
    let parsed: i64 = raw.parse().map_err(|_| invalid())?;
    if parsed.to_string() != raw {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Parse a float in canonical decimal form, without any range constraint.
///
/// Both the `Display` and the `Debug` rendering of the parsed value are
/// accepted as canonical, so `1` and `1.0` parse while `1e2` and `0.50` do
/// not. Non-finite spellings (`inf`, `NaN`) are rejected outright.
pub fn parse_canonical_f64(raw: &str) -> ParseResult<f64> {
    let invalid = || ParseError::InvalidFormat {
        raw: raw.to_string(),
        expected: "float",
    };
    let parsed: f64 = raw.parse().map_err(|_| invalid())?;
    if !parsed.is_finite() {
        return Err(invalid());
    }
    if parsed.to_string() != raw && format!("{parsed:?}") != raw {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Integer parser with optional inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntOptionParser {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntOptionParser {
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn parse(&self, raw: &str) -> ParseResult<i64> {
        let parsed = parse_canonical_i64(raw)?;
        let below_min = self.min.is_some_and(|min| parsed < min);
        let above_max = self.max.is_some_and(|max| parsed > max);
        if below_min || above_max {
            return Err(ParseError::OutOfRange {
                raw: raw.to_string(),
                parsed: parsed as f64,
                min: self.min.map(|v| v as f64),
                max: self.max.map(|v| v as f64),
            });
        }
        Ok(parsed)
    }
}

/// Float parser with optional inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatOptionParser {
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatOptionParser {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn parse(&self, raw: &str) -> ParseResult<f64> {
        let parsed = parse_canonical_f64(raw)?;
        let below_min = self.min.is_some_and(|min| parsed < min);
        let above_max = self.max.is_some_and(|max| parsed > max);
        if below_min || above_max {
            return Err(ParseError::OutOfRange {
                raw: raw.to_string(),
                parsed,
                min: self.min,
                max: self.max,
            });
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_canonical_accepts_plain_decimals() {
        assert_eq!(parse_canonical_i64("0").unwrap(), 0);
        assert_eq!(parse_canonical_i64("42").unwrap(), 42);
        assert_eq!(parse_canonical_i64("-7").unwrap(), -7);
    }

    #[test]
    fn test_int_canonical_rejects_non_canonical_spellings() {
        for raw in ["007", "+5", " 5", "5 ", "-0", "1_000", "0x10", ""] {
            assert!(parse_canonical_i64(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_float_canonical_accepts_both_renderings() {
        assert_eq!(parse_canonical_f64("1").unwrap(), 1.0);
        assert_eq!(parse_canonical_f64("1.0").unwrap(), 1.0);
        assert_eq!(parse_canonical_f64("0.5").unwrap(), 0.5);
        assert_eq!(parse_canonical_f64("-2.25").unwrap(), -2.25);
    }

    #[test]
    fn test_float_canonical_rejects_scientific_notation() {
        // "1e2" must not silently become 100.
        assert!(parse_canonical_f64("1e2").is_err());
        assert!(parse_canonical_f64("1E2").is_err());
    }

    #[test]
    fn test_float_canonical_rejects_redundant_forms() {
        for raw in ["0.50", "+1.5", ".5", "1.", "inf", "-inf", "NaN", "nan", ""] {
            assert!(parse_canonical_f64(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_int_parser_range_check_is_inclusive() {
        let parser = IntOptionParser::new(Some(0), Some(10));
        assert_eq!(parser.parse("0").unwrap(), 0);
        assert_eq!(parser.parse("10").unwrap(), 10);
        assert!(matches!(
            parser.parse("11"),
            Err(ParseError::OutOfRange { parsed, .. }) if parsed == 11.0
        ));
        assert!(parser.parse("-1").is_err());
    }

    #[test]
    fn test_int_parser_open_bounds() {
        let parser = IntOptionParser::new(Some(0), None);
        assert!(parser.parse("999999999").is_ok());
        let unbounded = IntOptionParser::new(None, None);
        assert!(unbounded.parse("-999999999").is_ok());
    }

    #[test]
    fn test_float_parser_range_error_carries_diagnostics() {
        let parser = FloatOptionParser::new(Some(0.0), Some(1.0));
        match parser.parse("2.5") {
            Err(ParseError::OutOfRange {
                raw,
                parsed,
                min,
                max,
            }) => {
                assert_eq!(raw, "2.5");
                assert_eq!(parsed, 2.5);
                assert_eq!(min, Some(0.0));
                assert_eq!(max, Some(1.0));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_format_is_checked_before_range() {
        // A wildly out-of-range but malformed value is an InvalidFormat.
        let parser = FloatOptionParser::new(Some(0.0), Some(1.0));
        assert!(matches!(
            parser.parse("9e9"),
            Err(ParseError::InvalidFormat { .. })
        ));
    }
}
