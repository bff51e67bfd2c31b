//! Duration option parser
//!
//! A raw duration is a numeric magnitude with an optional unit suffix
//! (`ms`, `s`, `m`). Values are normalized to canonical milliseconds before
//! the range check.

use crate::error::{ParseError, ParseResult};
use crate::parse::numeric::parse_canonical_f64;

/// Units a raw duration value may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnits {
    Milliseconds,
    Seconds,
    Minutes,
}

impl DurationUnits {
    /// Suffixes tried against the raw value, longest first. The descending
    /// length order is an invariant: `ms` must be tried before `s`, or every
    /// `ms` value would mis-parse as seconds of a magnitude ending in `m`.
    pub const SUFFIX_PAIRS: &'static [(&'static str, DurationUnits)] = &[
        ("ms", DurationUnits::Milliseconds),
        ("s", DurationUnits::Seconds),
        ("m", DurationUnits::Minutes),
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            DurationUnits::Milliseconds => "ms",
            DurationUnits::Seconds => "s",
            DurationUnits::Minutes => "m",
        }
    }
}

/// Convert a magnitude in `units` to canonical milliseconds.
pub fn to_milliseconds(value: f64, units: DurationUnits) -> f64 {
    match units {
        DurationUnits::Milliseconds => value,
        DurationUnits::Seconds => value * 1000.0,
        DurationUnits::Minutes => value * 60.0 * 1000.0,
    }
}

/// Duration parser with optional inclusive bounds in milliseconds and a
/// default unit applied when the raw value carries no suffix.
///
/// Both the bounded and the unbounded duration flavors of the agent are this
/// one parser: pass `None` bounds for the unconstrained configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationOptionParser {
    min_milliseconds: Option<f64>,
    max_milliseconds: Option<f64>,
    default_units: DurationUnits,
}

impl DurationOptionParser {
    pub const fn new(
        min_milliseconds: Option<f64>,
        max_milliseconds: Option<f64>,
        default_units: DurationUnits,
    ) -> Self {
        Self {
            min_milliseconds,
            max_milliseconds,
            default_units,
        }
    }

    /// Parse a raw duration into canonical milliseconds.
    pub fn parse(&self, raw: &str) -> ParseResult<f64> {
        let (magnitude, units) = split_to_value_and_units(raw);
        let units = units.unwrap_or(self.default_units);
        // The magnitude itself is an unconstrained float; only the converted
        // milliseconds are range-checked.
        let magnitude = parse_canonical_f64(magnitude).map_err(|_| ParseError::InvalidFormat {
            raw: raw.to_string(),
            expected: "duration",
        })?;
        let milliseconds = to_milliseconds(magnitude, units);

        let below_min = self
            .min_milliseconds
            .is_some_and(|min| milliseconds < min);
        let above_max = self
            .max_milliseconds
            .is_some_and(|max| milliseconds > max);
        if below_min || above_max {
            return Err(ParseError::OutOfRange {
                raw: raw.to_string(),
                parsed: milliseconds,
                min: self.min_milliseconds,
                max: self.max_milliseconds,
            });
        }
        Ok(milliseconds)
    }
}

/// Split a raw duration into its magnitude part and recognized unit suffix.
/// When no known suffix matches, the whole raw value is the magnitude.
fn split_to_value_and_units(raw: &str) -> (&str, Option<DurationUnits>) {
    debug_assert!(
        DurationUnits::SUFFIX_PAIRS
            .windows(2)
            .all(|pair| pair[0].0.len() >= pair[1].0.len()),
        "duration suffixes must be ordered by descending length"
    );
    for (suffix, units) in DurationUnits::SUFFIX_PAIRS {
        if raw.len() >= suffix.len() && raw.is_char_boundary(raw.len() - suffix.len()) {
            let split = raw.len() - suffix.len();
            if raw[split..].eq_ignore_ascii_case(suffix) {
                return (raw[..split].trim(), Some(*units));
            }
        }
    }
    (raw, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded(default_units: DurationUnits) -> DurationOptionParser {
        DurationOptionParser::new(None, None, default_units)
    }

    #[test]
    fn test_suffix_pairs_are_descending_length() {
        let lengths: Vec<usize> = DurationUnits::SUFFIX_PAIRS
            .iter()
            .map(|(suffix, _)| suffix.len())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_seconds_suffix() {
        let parser = unbounded(DurationUnits::Milliseconds);
        assert_eq!(parser.parse("10s").unwrap(), 10_000.0);
    }

    #[test]
    fn test_minutes_suffix() {
        let parser = unbounded(DurationUnits::Milliseconds);
        assert_eq!(parser.parse("3m").unwrap(), 180_000.0);
    }

    #[test]
    fn test_milliseconds_suffix_not_mismatched_as_minutes() {
        let parser = unbounded(DurationUnits::Seconds);
        assert_eq!(parser.parse("250ms").unwrap(), 250.0);
    }

    #[test]
    fn test_no_suffix_applies_default_units() {
        assert_eq!(unbounded(DurationUnits::Seconds).parse("5").unwrap(), 5_000.0);
        assert_eq!(
            unbounded(DurationUnits::Milliseconds).parse("5").unwrap(),
            5.0
        );
        assert_eq!(
            unbounded(DurationUnits::Minutes).parse("5").unwrap(),
            300_000.0
        );
    }

    #[test]
    fn test_suffix_is_case_insensitive_and_space_tolerated() {
        let parser = unbounded(DurationUnits::Milliseconds);
        assert_eq!(parser.parse("10S").unwrap(), 10_000.0);
        assert_eq!(parser.parse("10 s").unwrap(), 10_000.0);
    }

    #[test]
    fn test_fractional_magnitude() {
        let parser = unbounded(DurationUnits::Milliseconds);
        assert_eq!(parser.parse("1.5s").unwrap(), 1_500.0);
    }

    #[test]
    fn test_range_check_is_on_milliseconds() {
        let parser = DurationOptionParser::new(Some(1000.0), None, DurationUnits::Milliseconds);
        assert_eq!(parser.parse("1s").unwrap(), 1000.0);
        match parser.parse("999") {
            Err(ParseError::OutOfRange {
                parsed, min, max, ..
            }) => {
                assert_eq!(parsed, 999.0);
                assert_eq!(min, Some(1000.0));
                assert_eq!(max, None);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_upper_bound() {
        let parser = DurationOptionParser::new(Some(0.0), Some(60_000.0), DurationUnits::Seconds);
        assert!(parser.parse("2m").is_err());
        assert_eq!(parser.parse("1m").unwrap(), 60_000.0);
    }

    #[test]
    fn test_bad_magnitude_is_invalid_format() {
        let parser = unbounded(DurationUnits::Seconds);
        for raw in ["", "s", "abc", "1e2s", "10 x"] {
            assert!(
                matches!(parser.parse(raw), Err(ParseError::InvalidFormat { .. })),
                "accepted {raw:?}"
            );
        }
    }
}
