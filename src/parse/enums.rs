//! Generic enum option parser
//!
//! Backed by an ordered list of (name, value) pairs rather than a map: the
//! iteration order is what defines first-exact-match behavior and makes
//! prefix-ambiguity detection deterministic.

use crate::error::{ParseError, ParseResult};

/// Parser mapping raw strings onto a closed set of named values.
#[derive(Debug, Clone)]
pub struct EnumOptionParser<T: Copy> {
    /// Short description used in error messages, e.g. "log level"
    enum_desc: &'static str,
    name_value_pairs: Vec<(&'static str, T)>,
    case_sensitive: bool,
    unambiguous_prefix_allowed: bool,
}

impl<T: Copy> EnumOptionParser<T> {
    pub fn new(
        enum_desc: &'static str,
        name_value_pairs: Vec<(&'static str, T)>,
        case_sensitive: bool,
        unambiguous_prefix_allowed: bool,
    ) -> Self {
        Self {
            enum_desc,
            name_value_pairs,
            case_sensitive,
            unambiguous_prefix_allowed,
        }
    }

    pub fn name_value_pairs(&self) -> &[(&'static str, T)] {
        &self.name_value_pairs
    }

    /// Resolve a raw value to an enum value.
    ///
    /// An exact match (per the configured case sensitivity) always wins and
    /// returns immediately. Otherwise, with unambiguous-prefix matching
    /// enabled, the raw value may be a strict prefix of exactly one entry
    /// name; two or more prefixed entries is `AmbiguousEnumMatch`, none is
    /// `InvalidFormat`.
    pub fn parse(&self, raw: &str) -> ParseResult<T> {
        let mut prefix_matches: Vec<(&'static str, T)> = Vec::new();
        for (name, value) in &self.name_value_pairs {
            if !is_prefix_of(raw, name, self.case_sensitive) {
                continue;
            }
            if name.len() == raw.len() {
                return Ok(*value);
            }
            if self.unambiguous_prefix_allowed {
                prefix_matches.push((name, *value));
            }
        }

        match prefix_matches.as_slice() {
            [] => Err(ParseError::InvalidFormat {
                raw: raw.to_string(),
                expected: self.enum_desc,
            }),
            [(_, value)] => Ok(*value),
            many => Err(ParseError::AmbiguousEnumMatch {
                raw: raw.to_string(),
                expected: self.enum_desc,
                candidates: many.iter().map(|(name, _)| *name).collect(),
            }),
        }
    }
}

fn is_prefix_of(prefix: &str, text: &str, case_sensitive: bool) -> bool {
    if prefix.len() > text.len() {
        return false;
    }
    let head = &text[..prefix.len()];
    if case_sensitive {
        head == prefix
    } else {
        head.eq_ignore_ascii_case(prefix)
    }
}
