//! The resolution algorithm: raw snapshot in, typed values out
//!
//! Resolution is total: every registered option comes out with exactly one
//! value, and a raw value that fails to parse degrades to the option's
//! default instead of propagating an error. Degradation is silent for the
//! caller but always observable through the injected [`ResolveLogger`].

use std::collections::HashMap;

use crate::error::ParseError;
use crate::metadata::{OptionId, OptionMetadata};
use crate::sources::RawSnapshot;
use crate::value::ConfigValue;

/// The resolver's output: one parsed value per registered option.
pub type ResolvedOptions = HashMap<OptionId, ConfigValue>;

/// Observability collaborator injected into [`resolve`].
///
/// Passed explicitly rather than resolved from ambient context so tests can
/// assert on exactly what was logged.
pub trait ResolveLogger {
    /// The option was absent from the raw snapshot; its default applies.
    fn used_default(&mut self, option_name: &str, default: &ConfigValue);

    /// The raw value parsed successfully.
    fn parsed(&mut self, option_name: &str, raw: &str, value: &ConfigValue);

    /// The raw value failed to parse; the default applies instead.
    fn parse_failed(
        &mut self,
        option_name: &str,
        raw: &str,
        default: &ConfigValue,
        error: &ParseError,
    );
}

/// Default logger forwarding to the `log` crate facade. Absent options and
/// successful parses trace at debug level; parse failures are error-level
/// so a misconfiguration never goes unnoticed.
#[derive(Debug, Default)]
pub struct StandardResolveLogger;

impl ResolveLogger for StandardResolveLogger {
    fn used_default(&mut self, option_name: &str, default: &ConfigValue) {
        log::debug!("option `{option_name}' not set; using default value {default:?}");
    }

    fn parsed(&mut self, option_name: &str, raw: &str, value: &ConfigValue) {
        log::debug!("option `{option_name}' raw value `{raw}' parsed to {value:?}");
    }

    fn parse_failed(
        &mut self,
        option_name: &str,
        raw: &str,
        default: &ConfigValue,
        error: &ParseError,
    ) {
        log::error!(
            "failed to parse option `{option_name}' raw value `{raw}': {error}; \
             falling back to default value {default:?}"
        );
    }
}

/// Resolve every registered option against one raw snapshot.
///
/// For each option, in registration order: fetch the raw value; if absent,
/// assign the default; if present, trim and parse it, assigning the parsed
/// value on success and the default on failure. This function never fails:
/// [`ParseError`] is the only checked failure mode of parsing and it is
/// always caught here.
pub fn resolve(
    registry: &[(OptionId, OptionMetadata)],
    raw_snapshot: &dyn RawSnapshot,
    logger: &mut dyn ResolveLogger,
) -> ResolvedOptions {
    let mut resolved = ResolvedOptions::with_capacity(registry.len());
    for (id, metadata) in registry {
        let name = id.name();
        let value = match raw_snapshot.value_for(name) {
            None => {
                let default = metadata.default_value().clone();
                logger.used_default(name, &default);
                default
            }
            Some(raw) => {
                let trimmed = raw.trim();
                match metadata.parse(trimmed) {
                    Ok(value) => {
                        logger.parsed(name, trimmed, &value);
                        value
                    }
                    Err(error) => {
                        let default = metadata.default_value().clone();
                        logger.parse_failed(name, trimmed, &default, &error);
                        default
                    }
                }
            }
        };
        resolved.insert(*id, value);
    }
    resolved
}
