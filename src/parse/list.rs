//! List-valued option parsers: wildcard lists and key/value labels

use crate::error::ParseResult;
use crate::util::{split_key_value_pairs, truncate_keyword};
use crate::value::{LabelValue, Labels};
use crate::wildcard::WildcardMatcher;

use super::numeric::{parse_canonical_f64, parse_canonical_i64};

/// Parse a comma-separated list of wildcard expressions, preserving order.
/// Each element is trimmed; empty elements are dropped. Construction of a
/// matcher cannot fail, so neither can this parser.
pub fn parse_wildcard_list(raw: &str) -> Vec<WildcardMatcher> {
    raw.split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(WildcardMatcher::new)
        .collect()
}

/// Parse a `key=value,...` labels option, inferring a type per value.
///
/// `true`/`false` become booleans, canonical integers and floats become
/// numbers, the literal `null` becomes a null label, and anything else is a
/// keyword string (truncated to the keyword limit).
pub fn parse_labels(raw: &str) -> ParseResult<Labels> {
    let mut labels = Labels::new();
    for (key, value) in split_key_value_pairs(raw)? {
        labels.insert(key, infer_label_value(&value));
    }
    Ok(labels)
}

fn infer_label_value(value: &str) -> LabelValue {
    match value {
        "true" => return LabelValue::Bool(true),
        "false" => return LabelValue::Bool(false),
        "null" => return LabelValue::Null,
        _ => {}
    }
    if let Ok(int) = parse_canonical_i64(value) {
        return LabelValue::Int(int);
    }
    if let Ok(float) = parse_canonical_f64(value) {
        return LabelValue::Float(float);
    }
    LabelValue::String(truncate_keyword(value))
}
