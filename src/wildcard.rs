//! Glob-style wildcard matching for list-valued options
//!
//! A pattern is a sequence of literal parts separated by `*` wildcards, where
//! `*` matches any substring (including the empty one). Matching is
//! case-insensitive unless the expression starts with the `(?-i)` prefix.

use std::fmt;

use serde::{Serialize, Serializer};

const CASE_SENSITIVE_PREFIX: &str = "(?-i)";
const WILDCARD: char = '*';

/// A compiled wildcard expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardMatcher {
    case_sensitive: bool,
    starts_with_wildcard: bool,
    ends_with_wildcard: bool,
    literal_parts: Vec<String>,
}

impl WildcardMatcher {
    /// Compile a wildcard expression. Compilation cannot fail: every string
    /// is a valid expression.
    pub fn new(expr: &str) -> Self {
        let case_sensitive = expr.starts_with(CASE_SENSITIVE_PREFIX);
        let mut rest = if case_sensitive {
            &expr[CASE_SENSITIVE_PREFIX.len()..]
        } else {
            expr
        };

        let mut literal_parts = Vec::new();
        let mut starts_with_wildcard = false;
        let mut last_part_was_wildcard = false;
        while !rest.is_empty() {
            match rest.find(WILDCARD) {
                Some(0) => {
                    last_part_was_wildcard = true;
                    if literal_parts.is_empty() {
                        starts_with_wildcard = true;
                    }
                    rest = &rest[WILDCARD.len_utf8()..];
                }
                Some(pos) => {
                    last_part_was_wildcard = false;
                    literal_parts.push(rest[..pos].to_string());
                    rest = &rest[pos..];
                }
                None => {
                    last_part_was_wildcard = false;
                    literal_parts.push(rest.to_string());
                    rest = "";
                }
            }
        }

        Self {
            case_sensitive,
            starts_with_wildcard,
            ends_with_wildcard: last_part_was_wildcard,
            literal_parts,
        }
    }

    /// Check whether the whole of `text` matches this expression.
    pub fn matches(&self, text: &str) -> bool {
        if !self.starts_with_wildcard && self.literal_parts.is_empty() && !text.is_empty() {
            // Expression was empty (or wildcard-free and empty): only matches "".
            return false;
        }

        let mut allow_any_prefix = self.starts_with_wildcard;
        let mut text_pos = 0;
        let mut parts_to_check_in_loop = self.literal_parts.len();
        if parts_to_check_in_loop > 0 && !self.ends_with_wildcard {
            // The last literal part is anchored at the end and checked below.
            parts_to_check_in_loop -= 1;
        }
        for part in &self.literal_parts[..parts_to_check_in_loop] {
            match find_substring(text, part, text_pos, self.case_sensitive) {
                None => return false,
                Some(match_pos) => {
                    if !allow_any_prefix && match_pos != text_pos {
                        return false;
                    }
                    text_pos = match_pos + part.len();
                    allow_any_prefix = true;
                }
            }
        }

        if parts_to_check_in_loop < self.literal_parts.len() {
            let last_part = &self.literal_parts[self.literal_parts.len() - 1];
            if !self.starts_with_wildcard && self.literal_parts.len() == 1 {
                if !strings_equal(last_part, text, self.case_sensitive) {
                    return false;
                }
            } else if !is_suffix_of(last_part, text, self.case_sensitive) {
                return false;
            }
        }

        true
    }

    /// The expression with its case-sensitivity prefix stripped; used as the
    /// name of the group a matched value is bucketed under.
    pub fn group_name(&self) -> String {
        let mut result = String::new();
        if self.starts_with_wildcard {
            result.push(WILDCARD);
        }
        for (i, part) in self.literal_parts.iter().enumerate() {
            if i > 0 {
                result.push(WILDCARD);
            }
            result.push_str(part);
        }
        if self.ends_with_wildcard {
            result.push(WILDCARD);
        }
        result
    }
}

impl fmt::Display for WildcardMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.case_sensitive {
            f.write_str(CASE_SENSITIVE_PREFIX)?;
        }
        f.write_str(&self.group_name())
    }
}

impl Serialize for WildcardMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Return the first matcher in `matchers` that matches `text`, in list order.
pub fn match_any<'a>(matchers: &'a [WildcardMatcher], text: &str) -> Option<&'a WildcardMatcher> {
    matchers.iter().find(|m| m.matches(text))
}

fn find_substring(
    haystack: &str,
    needle: &str,
    from: usize,
    case_sensitive: bool,
) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if case_sensitive {
        haystack[from..].find(needle).map(|pos| pos + from)
    } else {
        haystack[from..]
            .to_ascii_lowercase()
            .find(&needle.to_ascii_lowercase())
            .map(|pos| pos + from)
    }
}

fn strings_equal(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn is_suffix_of(suffix: &str, text: &str, case_sensitive: bool) -> bool {
    if suffix.len() > text.len() {
        return false;
    }
    strings_equal(suffix, &text[text.len() - suffix.len()..], case_sensitive)
}
