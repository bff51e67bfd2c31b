//! Raw configuration sources
//!
//! A source produces a point-in-time, read-only string-keyed view of one
//! origin's configuration (process environment, ini settings, an in-memory
//! map). Sources never parse or validate: they either return a raw string
//! for an option name or omit it. All validation belongs to the parser
//! family.

pub mod composite;
pub mod env;
pub mod ini;

use std::collections::HashMap;

pub use composite::{CompositeRawSnapshot, CompositeRawSnapshotSource};
pub use env::EnvVarsRawSnapshotSource;
pub use ini::{IniRawSnapshotSource, IniSettings};

/// A read-only view of one source's configuration at a point in time.
pub trait RawSnapshot {
    /// The raw string value for an option name, or `None` when this source
    /// does not define it.
    fn value_for(&self, option_name: &str) -> Option<&str>;
}

/// Produces a fresh [`RawSnapshot`] on demand.
///
/// A fresh snapshot is pulled every time configuration is (re-)resolved;
/// sources themselves are constructed once at agent startup and reused.
pub trait RawSnapshotSource {
    fn current_snapshot(&self, option_names: &[&str]) -> Box<dyn RawSnapshot>;
}

/// A snapshot backed by an owned map.
#[derive(Debug, Clone, Default)]
pub struct MapRawSnapshot {
    values: HashMap<String, String>,
}

impl MapRawSnapshot {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl RawSnapshot for MapRawSnapshot {
    fn value_for(&self, option_name: &str) -> Option<&str> {
        self.values.get(option_name).map(String::as_str)
    }
}

/// An in-memory source, used for tests and programmatic overrides.
#[derive(Debug, Clone, Default)]
pub struct MapRawSnapshotSource {
    values: HashMap<String, String>,
}

impl MapRawSnapshotSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RawSnapshotSource for MapRawSnapshotSource {
    fn current_snapshot(&self, _option_names: &[&str]) -> Box<dyn RawSnapshot> {
        Box::new(MapRawSnapshot::new(self.values.clone()))
    }
}
