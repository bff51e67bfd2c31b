//! Environment-variable-backed raw snapshot source

use std::collections::HashMap;

use super::{MapRawSnapshot, RawSnapshot, RawSnapshotSource};

/// Default prefix of agent environment variables.
pub const DEFAULT_ENV_VAR_NAME_PREFIX: &str = "ELASTIC_APM_";

/// Source reading `<prefix><OPTION_NAME_UPPERCASE>` environment variables.
///
/// Lookup is process-local (`std::env::var`). Absent variables are omitted
/// from the snapshot, never inserted as empty strings.
#[derive(Debug, Clone)]
pub struct EnvVarsRawSnapshotSource {
    name_prefix: String,
}

impl EnvVarsRawSnapshotSource {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_VAR_NAME_PREFIX)
    }

    pub fn with_prefix(name_prefix: impl Into<String>) -> Self {
        Self {
            name_prefix: name_prefix.into(),
        }
    }

    /// The environment variable name for an option name under this prefix.
    pub fn env_var_name(&self, option_name: &str) -> String {
        format!("{}{}", self.name_prefix, option_name.to_ascii_uppercase())
    }
}

impl Default for EnvVarsRawSnapshotSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RawSnapshotSource for EnvVarsRawSnapshotSource {
    fn current_snapshot(&self, option_names: &[&str]) -> Box<dyn RawSnapshot> {
        let mut values = HashMap::new();
        for option_name in option_names {
            if let Ok(value) = std::env::var(self.env_var_name(option_name)) {
                values.insert(option_name.to_string(), value);
            }
        }
        Box::new(MapRawSnapshot::new(values))
    }
}
