//! Small collaborators used by the labels parser

use crate::error::{ParseError, ParseResult};

/// Maximum length of a keyword string stored in a label value. Longer values
/// are truncated; the agent-wide keyword limit applies here as well.
pub const KEYWORD_STRING_MAX_LENGTH: usize = 1024;

/// Truncate a string to the keyword limit on a character boundary.
pub fn truncate_keyword(value: &str) -> String {
    if value.len() <= KEYWORD_STRING_MAX_LENGTH {
        return value.to_string();
    }
    let mut end = KEYWORD_STRING_MAX_LENGTH;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

/// Split a raw value of the form `key=value,key=value,...` into trimmed
/// (key, value) pairs, preserving input order.
///
/// An empty (or all-whitespace) raw value yields no pairs. An element
/// without `=`, or with an empty key, is an `InvalidFormat` error.
pub fn split_key_value_pairs(raw: &str) -> ParseResult<Vec<(String, String)>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for element in raw.split(',') {
        let element = element.trim();
        let Some((key, value)) = element.split_once('=') else {
            return Err(ParseError::InvalidFormat {
                raw: element.to_string(),
                expected: "key=value pair",
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidFormat {
                raw: element.to_string(),
                expected: "key=value pair",
            });
        }
        pairs.push((key.to_string(), value.trim().to_string()));
    }
    Ok(pairs)
}
