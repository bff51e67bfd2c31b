//! Convenience loader assembling the default source chain
//!
//! Mirrors how the agent builds its configuration at startup: ini settings
//! are consulted before environment variables, so an explicit ini setting
//! takes precedence over an environment variable for the same option.
//! Callers needing any other precedence build their own composite.

use std::io;
use std::path::Path;

use crate::metadata::{all_options_metadata, OptionId};
use crate::resolver::{resolve, ResolveLogger, StandardResolveLogger};
use crate::snapshot::ConfigSnapshot;
use crate::sources::{
    CompositeRawSnapshotSource, EnvVarsRawSnapshotSource, IniRawSnapshotSource, IniSettings,
    RawSnapshotSource,
};

/// Builds typed configuration snapshots from the default source chain.
pub struct ConfigLoader {
    env_prefix: String,
    ini_prefix: String,
}

impl ConfigLoader {
    /// Loader with the default `elastic_apm.` / `ELASTIC_APM_` prefixes.
    pub fn new() -> Self {
        Self {
            env_prefix: crate::sources::env::DEFAULT_ENV_VAR_NAME_PREFIX.to_string(),
            ini_prefix: crate::sources::ini::DEFAULT_INI_NAME_PREFIX.to_string(),
        }
    }

    /// Loader with custom source prefixes.
    pub fn with_prefixes(ini_prefix: impl Into<String>, env_prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: env_prefix.into(),
            ini_prefix: ini_prefix.into(),
        }
    }

    /// Resolve configuration from environment variables only.
    pub fn from_env(&self) -> ConfigSnapshot {
        let source = EnvVarsRawSnapshotSource::with_prefix(self.env_prefix.clone());
        self.resolve_from(&source, &mut StandardResolveLogger)
    }

    /// Resolve configuration from an ini file with environment variables as
    /// the lower-priority fallback.
    pub fn from_ini_file(&self, path: impl AsRef<Path>) -> io::Result<ConfigSnapshot> {
        let settings = IniSettings::load(path)?;
        Ok(self.from_ini_settings(settings))
    }

    /// Resolve configuration from already-enumerated ini settings plus the
    /// environment fallback.
    pub fn from_ini_settings(&self, settings: IniSettings) -> ConfigSnapshot {
        let source = CompositeRawSnapshotSource::new(vec![
            Box::new(IniRawSnapshotSource::with_prefix(
                self.ini_prefix.clone(),
                settings,
            )),
            Box::new(EnvVarsRawSnapshotSource::with_prefix(
                self.env_prefix.clone(),
            )),
        ]);
        self.resolve_from(&source, &mut StandardResolveLogger)
    }

    /// Resolve with the fallback chain: an ini file when one is given,
    /// environment variables otherwise.
    pub fn load(&self, ini_path: Option<impl AsRef<Path>>) -> io::Result<ConfigSnapshot> {
        match ini_path {
            Some(path) => self.from_ini_file(path),
            None => Ok(self.from_env()),
        }
    }

    /// Resolve against an arbitrary source with an injected logger.
    pub fn resolve_from(
        &self,
        source: &dyn RawSnapshotSource,
        logger: &mut dyn ResolveLogger,
    ) -> ConfigSnapshot {
        let registry = all_options_metadata();
        let option_names: Vec<&str> = OptionId::ALL.iter().map(|id| id.name()).collect();
        let raw_snapshot = source.current_snapshot(&option_names);
        let resolved = resolve(&registry, raw_snapshot.as_ref(), logger);
        ConfigSnapshot::from_resolved(&resolved)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
