//! The immutable typed configuration snapshot
//!
//! Built once per resolution pass from the resolver's output; a later
//! re-resolution produces a brand-new snapshot instead of mutating this
//! one, so previously distributed references stay valid.
//!
//! Assembly narrows each dynamic [`ConfigValue`] back to its static field
//! type. A missing registry entry or a wrong-kind value means the option
//! registry and this schema have drifted apart — a programming defect, not
//! a user configuration error — and assembly panics with a diagnostic
//! instead of degrading.

use serde::Serialize;

use crate::metadata::OptionId;
use crate::resolver::ResolvedOptions;
use crate::value::{ConfigValue, Labels, LogLevel};
use crate::wildcard::WildcardMatcher;

/// All resolved configuration values, one field per registered option.
/// Field names equal option names (identity case transform).
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    pub api_key: Option<String>,
    pub async_backend_comm: bool,
    pub breakdown_metrics: bool,
    pub capture_errors: bool,
    pub dev_internal: Option<Vec<WildcardMatcher>>,
    pub disable_instrumentations: Option<Vec<WildcardMatcher>>,
    pub disable_send: bool,
    pub enabled: bool,
    pub environment: Option<String>,
    pub gc_collect_cycles_after_every_transaction: bool,
    pub gc_mem_caches_after_every_transaction: bool,
    pub global_labels: Option<Labels>,
    pub hostname: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_level_stderr: Option<LogLevel>,
    pub log_level_syslog: Option<LogLevel>,
    pub non_keyword_string_max_length: i64,
    pub profiling_inferred_spans_enabled: bool,
    /// Canonical milliseconds
    pub profiling_inferred_spans_min_duration: f64,
    /// Canonical milliseconds
    pub profiling_inferred_spans_sampling_interval: f64,
    pub sanitize_field_names: Vec<WildcardMatcher>,
    pub secret_token: Option<String>,
    /// Canonical milliseconds
    pub server_timeout: f64,
    pub service_name: Option<String>,
    pub service_node_name: Option<String>,
    pub service_version: Option<String>,
    pub transaction_ignore_urls: Option<Vec<WildcardMatcher>>,
    pub transaction_max_spans: i64,
    pub transaction_sample_rate: f64,
    pub url_groups: Option<Vec<WildcardMatcher>>,
    pub verify_server_cert: bool,
}

impl ConfigSnapshot {
    /// Assemble the typed snapshot from one resolution's output.
    ///
    /// Panics on registry/schema drift (missing option or wrong value
    /// kind); see the module docs for why this is fatal rather than
    /// recoverable.
    pub fn from_resolved(resolved: &ResolvedOptions) -> Self {
        use OptionId::*;

        Self {
            api_key: opt_string(resolved, ApiKey),
            async_backend_comm: bool_value(resolved, AsyncBackendComm),
            breakdown_metrics: bool_value(resolved, BreakdownMetrics),
            capture_errors: bool_value(resolved, CaptureErrors),
            dev_internal: opt_wildcard_list(resolved, DevInternal),
            disable_instrumentations: opt_wildcard_list(resolved, DisableInstrumentations),
            disable_send: bool_value(resolved, DisableSend),
            enabled: bool_value(resolved, Enabled),
            environment: opt_string(resolved, Environment),
            gc_collect_cycles_after_every_transaction: bool_value(
                resolved,
                GcCollectCyclesAfterEveryTransaction,
            ),
            gc_mem_caches_after_every_transaction: bool_value(
                resolved,
                GcMemCachesAfterEveryTransaction,
            ),
            global_labels: opt_labels(resolved, GlobalLabels),
            hostname: opt_string(resolved, Hostname),
            log_level: opt_log_level(resolved, LogLevel),
            log_level_stderr: opt_log_level(resolved, LogLevelStderr),
            log_level_syslog: opt_log_level(resolved, LogLevelSyslog),
            non_keyword_string_max_length: int_value(resolved, NonKeywordStringMaxLength),
            profiling_inferred_spans_enabled: bool_value(resolved, ProfilingInferredSpansEnabled),
            profiling_inferred_spans_min_duration: duration_ms(
                resolved,
                ProfilingInferredSpansMinDuration,
            ),
            profiling_inferred_spans_sampling_interval: duration_ms(
                resolved,
                ProfilingInferredSpansSamplingInterval,
            ),
            sanitize_field_names: wildcard_list(resolved, SanitizeFieldNames),
            secret_token: opt_string(resolved, SecretToken),
            server_timeout: duration_ms(resolved, ServerTimeout),
            service_name: opt_string(resolved, ServiceName),
            service_node_name: opt_string(resolved, ServiceNodeName),
            service_version: opt_string(resolved, ServiceVersion),
            transaction_ignore_urls: opt_wildcard_list(resolved, TransactionIgnoreUrls),
            transaction_max_spans: int_value(resolved, TransactionMaxSpans),
            transaction_sample_rate: float_value(resolved, TransactionSampleRate),
            url_groups: opt_wildcard_list(resolved, UrlGroups),
            verify_server_cert: bool_value(resolved, VerifyServerCert),
        }
    }

    /// The most verbose level any log sink is configured for: per-sink
    /// levels fall back to the general `log_level`, then to `Info`.
    pub fn effective_log_level(&self) -> LogLevel {
        let stderr = self
            .log_level_stderr
            .or(self.log_level)
            .unwrap_or(LogLevel::Info);
        let syslog = self
            .log_level_syslog
            .or(self.log_level)
            .unwrap_or(LogLevel::Info);
        stderr.max(syslog)
    }

    /// Dump the effective configuration for diagnostics.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn resolved_value(resolved: &ResolvedOptions, id: OptionId) -> &ConfigValue {
    resolved.get(&id).unwrap_or_else(|| {
        panic!(
            "option `{}' missing from resolved configuration; \
             the option registry and the snapshot schema are out of sync",
            id.name()
        )
    })
}

fn kind_mismatch(id: OptionId, expected: &str, actual: &ConfigValue) -> ! {
    panic!(
        "option `{}' resolved to a {} value where {} was expected; \
         the option registry and the snapshot schema are out of sync",
        id.name(),
        actual.kind(),
        expected
    )
}

fn bool_value(resolved: &ResolvedOptions, id: OptionId) -> bool {
    match resolved_value(resolved, id) {
        ConfigValue::Bool(value) => *value,
        other => kind_mismatch(id, "bool", other),
    }
}

fn int_value(resolved: &ResolvedOptions, id: OptionId) -> i64 {
    match resolved_value(resolved, id) {
        ConfigValue::Int(value) => *value,
        other => kind_mismatch(id, "int", other),
    }
}

fn float_value(resolved: &ResolvedOptions, id: OptionId) -> f64 {
    match resolved_value(resolved, id) {
        ConfigValue::Float(value) => *value,
        other => kind_mismatch(id, "float", other),
    }
}

fn duration_ms(resolved: &ResolvedOptions, id: OptionId) -> f64 {
    match resolved_value(resolved, id) {
        ConfigValue::Duration(milliseconds) => *milliseconds,
        other => kind_mismatch(id, "duration", other),
    }
}

fn wildcard_list(resolved: &ResolvedOptions, id: OptionId) -> Vec<WildcardMatcher> {
    match resolved_value(resolved, id) {
        ConfigValue::WildcardList(list) => list.clone(),
        other => kind_mismatch(id, "wildcard list", other),
    }
}

fn opt_string(resolved: &ResolvedOptions, id: OptionId) -> Option<String> {
    match resolved_value(resolved, id) {
        ConfigValue::String(value) => Some(value.clone()),
        ConfigValue::Null => None,
        other => kind_mismatch(id, "nullable string", other),
    }
}

fn opt_log_level(resolved: &ResolvedOptions, id: OptionId) -> Option<LogLevel> {
    match resolved_value(resolved, id) {
        ConfigValue::LogLevel(level) => Some(*level),
        ConfigValue::Null => None,
        other => kind_mismatch(id, "nullable log level", other),
    }
}

fn opt_wildcard_list(resolved: &ResolvedOptions, id: OptionId) -> Option<Vec<WildcardMatcher>> {
    match resolved_value(resolved, id) {
        ConfigValue::WildcardList(list) => Some(list.clone()),
        ConfigValue::Null => None,
        other => kind_mismatch(id, "nullable wildcard list", other),
    }
}

fn opt_labels(resolved: &ResolvedOptions, id: OptionId) -> Option<Labels> {
    match resolved_value(resolved, id) {
        ConfigValue::Labels(labels) => Some(labels.clone()),
        ConfigValue::Null => None,
        other => kind_mismatch(id, "nullable labels", other),
    }
}
