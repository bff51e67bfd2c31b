//! Dynamic value types shared by the parser family, the resolver and the
//! typed snapshot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wildcard::WildcardMatcher;

/// Agent log verbosity, from fully silent to most verbose.
///
/// The derived ordering follows verbosity: `Off < Critical < ... < Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Ordered (name, value) pairs backing the log-level enum parser.
    ///
    /// This is deliberately a list of pairs, not a map: iteration order
    /// determines first-exact-match and prefix-ambiguity semantics.
    pub const NAME_VALUE_PAIRS: &'static [(&'static str, LogLevel)] = &[
        ("off", LogLevel::Off),
        ("critical", LogLevel::Critical),
        ("error", LogLevel::Error),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
    ];

    /// The lowercase name of this level.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// One value of a `key=value` labels option. The type of each value is
/// inferred independently from its spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LabelValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Null,
}

/// An ordered (sorted-key) label map. Equality is independent of the order
/// the pairs appeared in the raw value.
pub type Labels = BTreeMap<String, LabelValue>;

/// A parsed configuration value of any registered kind.
///
/// This is the dynamic side of the option type system: the registry and the
/// resolver traffic in `ConfigValue`, while the typed snapshot narrows each
/// entry back to its static type during assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A duration normalized to canonical milliseconds
    Duration(f64),
    String(String),
    LogLevel(LogLevel),
    WildcardList(Vec<WildcardMatcher>),
    Labels(Labels),
    /// The implicit default of the nullable option family
    Null,
}

impl ConfigValue {
    /// A short kind name, used in drift diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Duration(_) => "duration",
            ConfigValue::String(_) => "string",
            ConfigValue::LogLevel(_) => "log level",
            ConfigValue::WildcardList(_) => "wildcard list",
            ConfigValue::Labels(_) => "labels",
            ConfigValue::Null => "null",
        }
    }
}
