//! Configuration parse error types

use thiserror::Error;

/// Result type for option parsers
pub type ParseResult<T> = Result<T, ParseError>;

/// A user configuration error detected while parsing one raw option value.
///
/// This is the only checked failure mode of the parser family. The resolver
/// always recovers from it by substituting the option's default, so a
/// `ParseError` never propagates past resolution and never aborts startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The raw value does not match the expected grammar
    #[error("not a valid {expected} value; raw option value: `{raw}'")]
    InvalidFormat {
        /// The raw input as received (already trimmed)
        raw: String,
        /// Short description of the expected grammar, e.g. "boolean" or "log level"
        expected: &'static str,
    },

    /// The value parsed but violates the inclusive `[min, max]` range
    #[error(
        "value is not in range between the valid minimum and maximum values; \
         raw option value: `{raw}', parsed value: {parsed}, \
         valid minimum: {min:?}, valid maximum: {max:?}"
    )]
    OutOfRange {
        /// The raw input as received (already trimmed)
        raw: String,
        /// The parsed numeric value (in milliseconds for duration options)
        parsed: f64,
        /// Inclusive lower bound, `None` when unbounded
        min: Option<f64>,
        /// Inclusive upper bound, `None` when unbounded
        max: Option<f64>,
    },

    /// The value is a prefix of two or more enum entry names
    #[error(
        "not a valid {expected} value - it matches more than one entry as a prefix; \
         raw option value: `{raw}', matching entries: {candidates:?}"
    )]
    AmbiguousEnumMatch {
        /// The raw input as received (already trimmed)
        raw: String,
        /// Description of the enum, e.g. "log level"
        expected: &'static str,
        /// Every entry name the raw input is a prefix of
        candidates: Vec<&'static str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = ParseError::InvalidFormat {
            raw: "maybe".to_string(),
            expected: "boolean",
        };
        let msg = err.to_string();
        assert!(msg.contains("boolean"));
        assert!(msg.contains("`maybe'"));
    }

    #[test]
    fn test_out_of_range_display_carries_bounds() {
        let err = ParseError::OutOfRange {
            raw: "2.5".to_string(),
            parsed: 2.5,
            min: Some(0.0),
            max: Some(1.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("2.5"));
        assert!(msg.contains("Some(0.0)"));
        assert!(msg.contains("Some(1.0)"));
    }

    #[test]
    fn test_ambiguous_enum_match_display_carries_candidates() {
        let err = ParseError::AmbiguousEnumMatch {
            raw: "c".to_string(),
            expected: "log level",
            candidates: vec!["critical", "custom"],
        };
        let msg = err.to_string();
        assert!(msg.contains("critical"));
        assert!(msg.contains("custom"));
    }
}
