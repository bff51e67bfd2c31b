//! Ini-settings-backed raw snapshot source
//!
//! The agent's ini settings live under a dotted prefix
//! (`elastic_apm.option_name`) among all currently active runtime settings.
//! This source filters them out and normalizes boolean words to the literal
//! strings `true`/`false` before they reach any parser.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;

use super::{MapRawSnapshot, RawSnapshot, RawSnapshotSource};

/// Default dotted prefix of agent ini settings.
pub const DEFAULT_INI_NAME_PREFIX: &str = "elastic_apm.";

/// An enumeration of currently active ini settings, keyed by full setting
/// name (prefix included).
#[derive(Debug, Clone, Default)]
pub struct IniSettings {
    entries: BTreeMap<String, String>,
}

impl IniSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Load settings from an ini-style file: `key = value` lines, `;` and
    /// `#` comments, `[section]` headers ignored (keys are global),
    /// surrounding quotes stripped from values.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), strip_quotes(value.trim()).to_string());
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Normalize ini boolean words to the literal strings the boolean parser
/// treats as canonical. Numeric `0`/`1` are deliberately left untouched:
/// they may belong to integer options sharing the source.
fn normalize_boolean_word(value: &str) -> &str {
    if value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("yes")
    {
        "true"
    } else if value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("no")
    {
        "false"
    } else {
        value
    }
}

/// Source reading `<dotted-prefix><option_name>` ini settings.
#[derive(Debug, Clone)]
pub struct IniRawSnapshotSource {
    name_prefix: String,
    settings: IniSettings,
}

impl IniRawSnapshotSource {
    pub fn new(settings: IniSettings) -> Self {
        Self::with_prefix(DEFAULT_INI_NAME_PREFIX, settings)
    }

    pub fn with_prefix(name_prefix: impl Into<String>, settings: IniSettings) -> Self {
        Self {
            name_prefix: name_prefix.into(),
            settings,
        }
    }

    /// The full ini setting name for an option name under this prefix.
    pub fn ini_name(&self, option_name: &str) -> String {
        format!("{}{}", self.name_prefix, option_name)
    }
}

impl RawSnapshotSource for IniRawSnapshotSource {
    fn current_snapshot(&self, option_names: &[&str]) -> Box<dyn RawSnapshot> {
        let mut values = HashMap::new();
        for option_name in option_names {
            if let Some(value) = self.settings.get(&self.ini_name(option_name)) {
                values.insert(
                    option_name.to_string(),
                    normalize_boolean_word(value).to_string(),
                );
            }
        }
        Box::new(MapRawSnapshot::new(values))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_sections() {
        let settings = IniSettings::parse(
            "; a comment\n\
             # another\n\
             [elastic_apm]\n\
             elastic_apm.enabled = off\n\
             \n\
             elastic_apm.service_name = \"checkout\"\n",
        );
        assert_eq!(settings.get("elastic_apm.enabled"), Some("off"));
        assert_eq!(settings.get("elastic_apm.service_name"), Some("checkout"));
    }

    #[test]
    fn test_parse_strips_single_quotes() {
        let settings = IniSettings::parse("elastic_apm.environment = 'prod'\n");
        assert_eq!(settings.get("elastic_apm.environment"), Some("prod"));
    }

    #[test]
    fn test_boolean_words_are_normalized() {
        let settings = IniSettings::from_entries([
            ("elastic_apm.enabled", "Off"),
            ("elastic_apm.capture_errors", "yes"),
            ("elastic_apm.transaction_max_spans", "1"),
        ]);
        let source = IniRawSnapshotSource::new(settings);
        let snapshot =
            source.current_snapshot(&["enabled", "capture_errors", "transaction_max_spans"]);
        assert_eq!(snapshot.value_for("enabled"), Some("false"));
        assert_eq!(snapshot.value_for("capture_errors"), Some("true"));
        // Numeric 1 is untouched so integer options are not corrupted.
        assert_eq!(snapshot.value_for("transaction_max_spans"), Some("1"));
    }

    #[test]
    fn test_unprefixed_settings_are_invisible() {
        let settings = IniSettings::from_entries([("memory_limit", "128M")]);
        let source = IniRawSnapshotSource::new(settings);
        let snapshot = source.current_snapshot(&["memory_limit"]);
        assert_eq!(snapshot.value_for("memory_limit"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "elastic_apm.server_timeout = 10s").unwrap();
        writeln!(file, "elastic_apm.enabled = on").unwrap();
        let settings = IniSettings::load(file.path()).unwrap();
        let source = IniRawSnapshotSource::new(settings);
        let snapshot = source.current_snapshot(&["server_timeout", "enabled"]);
        assert_eq!(snapshot.value_for("server_timeout"), Some("10s"));
        assert_eq!(snapshot.value_for("enabled"), Some("true"));
    }
}
