//! The per-option parser family
//!
//! Every parser is a pure function from a trimmed raw string to a typed
//! value or a [`ParseError`]. Parsers never look at sources and sources
//! never parse; validation lives entirely on this side of the boundary.

pub mod duration;
pub mod enums;
pub mod list;
pub mod numeric;

use crate::error::{ParseError, ParseResult};
use crate::value::{ConfigValue, LogLevel};

pub use duration::{DurationOptionParser, DurationUnits};
pub use enums::EnumOptionParser;
pub use numeric::{FloatOptionParser, IntOptionParser};

/// Parse a boolean token. Accepts exactly `true`/`yes`/`on`/`1` and
/// `false`/`no`/`off`/`0`, case-insensitively.
pub fn parse_boolean(raw: &str) -> ParseResult<bool> {
    const TRUE_TOKENS: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSE_TOKENS: [&str; 4] = ["false", "no", "off", "0"];

    if TRUE_TOKENS.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        return Ok(true);
    }
    if FALSE_TOKENS.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        return Ok(false);
    }
    Err(ParseError::InvalidFormat {
        raw: raw.to_string(),
        expected: "boolean",
    })
}

/// Build the log-level enum parser: case-insensitive, unambiguous prefixes
/// allowed.
pub fn log_level_parser() -> EnumOptionParser<LogLevel> {
    EnumOptionParser::new(
        "log level",
        LogLevel::NAME_VALUE_PAIRS.to_vec(),
        /* case_sensitive */ false,
        /* unambiguous_prefix_allowed */ true,
    )
}

/// The closed set of parser configurations an option can be registered with.
///
/// This is the dynamic-dispatch seam between the statically typed parsers
/// and the name-keyed registry: each variant delegates to its parser and
/// wraps the result in a [`ConfigValue`].
#[derive(Debug, Clone)]
pub enum OptionParser {
    Bool,
    Int(IntOptionParser),
    Float(FloatOptionParser),
    Duration(DurationOptionParser),
    LogLevel(EnumOptionParser<LogLevel>),
    String,
    WildcardList,
    Labels,
}

impl OptionParser {
    /// Parse a trimmed raw value into a dynamic [`ConfigValue`].
    pub fn parse(&self, raw: &str) -> ParseResult<ConfigValue> {
        match self {
            OptionParser::Bool => parse_boolean(raw).map(ConfigValue::Bool),
            OptionParser::Int(parser) => parser.parse(raw).map(ConfigValue::Int),
            OptionParser::Float(parser) => parser.parse(raw).map(ConfigValue::Float),
            OptionParser::Duration(parser) => parser.parse(raw).map(ConfigValue::Duration),
            OptionParser::LogLevel(parser) => parser.parse(raw).map(ConfigValue::LogLevel),
            // The string parser is the identity function.
            OptionParser::String => Ok(ConfigValue::String(raw.to_string())),
            OptionParser::WildcardList => {
                Ok(ConfigValue::WildcardList(list::parse_wildcard_list(raw)))
            }
            OptionParser::Labels => list::parse_labels(raw).map(ConfigValue::Labels),
        }
    }
}
