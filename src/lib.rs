//! Typed configuration resolution for an APM agent
//!
//! This crate turns string-only configuration sources (process environment,
//! ini settings, in-memory maps) into one strongly-typed, immutable
//! snapshot, with per-option parsers, well-defined source precedence and
//! graceful degradation: a value that fails to parse falls back to the
//! option's default and is reported at error level, never aborting startup.
//!
//! Control flow: sources → composite source → raw snapshot → resolver
//! (driven by the option metadata registry) → typed [`ConfigSnapshot`].

pub mod error;
pub mod loader;
pub mod metadata;
pub mod parse;
pub mod resolver;
pub mod snapshot;
pub mod sources;
pub mod util;
pub mod value;
pub mod wildcard;

// Re-export main types
pub use error::{ParseError, ParseResult};
pub use loader::ConfigLoader;
pub use metadata::{all_options_metadata, OptionId, OptionMetadata};
pub use resolver::{resolve, ResolveLogger, ResolvedOptions, StandardResolveLogger};
pub use snapshot::ConfigSnapshot;
pub use value::{ConfigValue, LabelValue, Labels, LogLevel};
pub use wildcard::WildcardMatcher;

// Re-export sources
pub use sources::{
    CompositeRawSnapshotSource, EnvVarsRawSnapshotSource, IniRawSnapshotSource, IniSettings,
    MapRawSnapshotSource, RawSnapshot, RawSnapshotSource,
};
