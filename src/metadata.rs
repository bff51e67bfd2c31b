//! Option metadata and the option registry
//!
//! Every configurable option is one [`OptionId`] variant bound to one
//! immutable [`OptionMetadata`] instance (parser + default). The registry
//! assembled by [`all_options_metadata`] defines the complete configuration
//! surface; its key set and order are what the resolver iterates.

use crate::error::ParseResult;
use crate::parse::{
    log_level_parser, DurationOptionParser, DurationUnits, FloatOptionParser, IntOptionParser,
    OptionParser,
};
use crate::parse::list::parse_wildcard_list;
use crate::value::ConfigValue;

/// Default for `non_keyword_string_max_length`.
pub const DEFAULT_NON_KEYWORD_STRING_MAX_LENGTH: i64 = 10 * 1024;

/// Default for `transaction_max_spans`.
pub const DEFAULT_TRANSACTION_MAX_SPANS: i64 = 500;

/// Default for `server_timeout`, in milliseconds.
pub const DEFAULT_SERVER_TIMEOUT_MILLISECONDS: f64 = 30.0 * 1000.0;

/// Default field-name patterns whose values are sanitized before sending.
pub const DEFAULT_SANITIZE_FIELD_NAMES: &str =
    "password, passwd, pwd, secret, *key, *token*, *session*, *credit*, *card*, *auth*, set-cookie";

/// Identity of one registered configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    ApiKey,
    AsyncBackendComm,
    BreakdownMetrics,
    CaptureErrors,
    DevInternal,
    DisableInstrumentations,
    DisableSend,
    Enabled,
    Environment,
    GcCollectCyclesAfterEveryTransaction,
    GcMemCachesAfterEveryTransaction,
    GlobalLabels,
    Hostname,
    LogLevel,
    LogLevelStderr,
    LogLevelSyslog,
    NonKeywordStringMaxLength,
    ProfilingInferredSpansEnabled,
    ProfilingInferredSpansMinDuration,
    ProfilingInferredSpansSamplingInterval,
    SanitizeFieldNames,
    SecretToken,
    ServerTimeout,
    ServiceName,
    ServiceNodeName,
    ServiceVersion,
    TransactionIgnoreUrls,
    TransactionMaxSpans,
    TransactionSampleRate,
    UrlGroups,
    VerifyServerCert,
}

impl OptionId {
    /// Every registered option, in registration order.
    pub const ALL: [OptionId; 31] = [
        OptionId::ApiKey,
        OptionId::AsyncBackendComm,
        OptionId::BreakdownMetrics,
        OptionId::CaptureErrors,
        OptionId::DevInternal,
        OptionId::DisableInstrumentations,
        OptionId::DisableSend,
        OptionId::Enabled,
        OptionId::Environment,
        OptionId::GcCollectCyclesAfterEveryTransaction,
        OptionId::GcMemCachesAfterEveryTransaction,
        OptionId::GlobalLabels,
        OptionId::Hostname,
        OptionId::LogLevel,
        OptionId::LogLevelStderr,
        OptionId::LogLevelSyslog,
        OptionId::NonKeywordStringMaxLength,
        OptionId::ProfilingInferredSpansEnabled,
        OptionId::ProfilingInferredSpansMinDuration,
        OptionId::ProfilingInferredSpansSamplingInterval,
        OptionId::SanitizeFieldNames,
        OptionId::SecretToken,
        OptionId::ServerTimeout,
        OptionId::ServiceName,
        OptionId::ServiceNodeName,
        OptionId::ServiceVersion,
        OptionId::TransactionIgnoreUrls,
        OptionId::TransactionMaxSpans,
        OptionId::TransactionSampleRate,
        OptionId::UrlGroups,
        OptionId::VerifyServerCert,
    ];

    /// The stable lowercase-with-separators name of this option. Sources
    /// derive their external key names from it (`ELASTIC_APM_` + uppercase
    /// for environment variables, `elastic_apm.` + name for ini settings).
    pub fn name(self) -> &'static str {
        match self {
            OptionId::ApiKey => "api_key",
            OptionId::AsyncBackendComm => "async_backend_comm",
            OptionId::BreakdownMetrics => "breakdown_metrics",
            OptionId::CaptureErrors => "capture_errors",
            OptionId::DevInternal => "dev_internal",
            OptionId::DisableInstrumentations => "disable_instrumentations",
            OptionId::DisableSend => "disable_send",
            OptionId::Enabled => "enabled",
            OptionId::Environment => "environment",
            OptionId::GcCollectCyclesAfterEveryTransaction => {
                "gc_collect_cycles_after_every_transaction"
            }
            OptionId::GcMemCachesAfterEveryTransaction => "gc_mem_caches_after_every_transaction",
            OptionId::GlobalLabels => "global_labels",
            OptionId::Hostname => "hostname",
            OptionId::LogLevel => "log_level",
            OptionId::LogLevelStderr => "log_level_stderr",
            OptionId::LogLevelSyslog => "log_level_syslog",
            OptionId::NonKeywordStringMaxLength => "non_keyword_string_max_length",
            OptionId::ProfilingInferredSpansEnabled => "profiling_inferred_spans_enabled",
            OptionId::ProfilingInferredSpansMinDuration => "profiling_inferred_spans_min_duration",
            OptionId::ProfilingInferredSpansSamplingInterval => {
                "profiling_inferred_spans_sampling_interval"
            }
            OptionId::SanitizeFieldNames => "sanitize_field_names",
            OptionId::SecretToken => "secret_token",
            OptionId::ServerTimeout => "server_timeout",
            OptionId::ServiceName => "service_name",
            OptionId::ServiceNodeName => "service_node_name",
            OptionId::ServiceVersion => "service_version",
            OptionId::TransactionIgnoreUrls => "transaction_ignore_urls",
            OptionId::TransactionMaxSpans => "transaction_max_spans",
            OptionId::TransactionSampleRate => "transaction_sample_rate",
            OptionId::UrlGroups => "url_groups",
            OptionId::VerifyServerCert => "verify_server_cert",
        }
    }
}

/// The pairing of a parser and a default value for one named option.
///
/// Immutable and safe to share across any number of concurrent resolutions.
/// Exposes exactly two operations: `parse` and `default_value`.
#[derive(Debug, Clone)]
pub struct OptionMetadata {
    parser: OptionParser,
    default: ConfigValue,
}

impl OptionMetadata {
    pub fn new(parser: OptionParser, default: ConfigValue) -> Self {
        Self { parser, default }
    }

    /// Metadata of the nullable family: same parsing behavior, with `null`
    /// substituted as the default when no raw value is supplied.
    pub fn nullable(parser: OptionParser) -> Self {
        Self {
            parser,
            default: ConfigValue::Null,
        }
    }

    pub fn parse(&self, raw: &str) -> ParseResult<ConfigValue> {
        self.parser.parse(raw)
    }

    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }
}

/// The registry of the whole configuration surface: one metadata instance
/// per option, in registration order. Built once at agent startup and
/// reused for every resolution.
pub fn all_options_metadata() -> Vec<(OptionId, OptionMetadata)> {
    use OptionId::*;

    vec![
        (ApiKey, OptionMetadata::nullable(OptionParser::String)),
        (AsyncBackendComm, bool_option(true)),
        (BreakdownMetrics, bool_option(true)),
        (CaptureErrors, bool_option(true)),
        (DevInternal, OptionMetadata::nullable(OptionParser::WildcardList)),
        (
            DisableInstrumentations,
            OptionMetadata::nullable(OptionParser::WildcardList),
        ),
        (DisableSend, bool_option(false)),
        (Enabled, bool_option(true)),
        (Environment, OptionMetadata::nullable(OptionParser::String)),
        (GcCollectCyclesAfterEveryTransaction, bool_option(false)),
        (GcMemCachesAfterEveryTransaction, bool_option(false)),
        (GlobalLabels, OptionMetadata::nullable(OptionParser::Labels)),
        (Hostname, OptionMetadata::nullable(OptionParser::String)),
        (LogLevel, nullable_log_level_option()),
        (LogLevelStderr, nullable_log_level_option()),
        (LogLevelSyslog, nullable_log_level_option()),
        (
            NonKeywordStringMaxLength,
            OptionMetadata::new(
                OptionParser::Int(IntOptionParser::new(Some(0), None)),
                ConfigValue::Int(DEFAULT_NON_KEYWORD_STRING_MAX_LENGTH),
            ),
        ),
        (ProfilingInferredSpansEnabled, bool_option(false)),
        (
            ProfilingInferredSpansMinDuration,
            OptionMetadata::new(
                OptionParser::Duration(DurationOptionParser::new(
                    Some(0.0),
                    None,
                    DurationUnits::Milliseconds,
                )),
                ConfigValue::Duration(0.0),
            ),
        ),
        (
            ProfilingInferredSpansSamplingInterval,
            OptionMetadata::new(
                OptionParser::Duration(DurationOptionParser::new(
                    Some(1000.0),
                    None,
                    DurationUnits::Milliseconds,
                )),
                ConfigValue::Duration(1000.0),
            ),
        ),
        (
            SanitizeFieldNames,
            OptionMetadata::new(
                OptionParser::WildcardList,
                ConfigValue::WildcardList(parse_wildcard_list(DEFAULT_SANITIZE_FIELD_NAMES)),
            ),
        ),
        (SecretToken, OptionMetadata::nullable(OptionParser::String)),
        (
            ServerTimeout,
            OptionMetadata::new(
                OptionParser::Duration(DurationOptionParser::new(
                    Some(0.0),
                    None,
                    DurationUnits::Seconds,
                )),
                ConfigValue::Duration(DEFAULT_SERVER_TIMEOUT_MILLISECONDS),
            ),
        ),
        (ServiceName, OptionMetadata::nullable(OptionParser::String)),
        (ServiceNodeName, OptionMetadata::nullable(OptionParser::String)),
        (ServiceVersion, OptionMetadata::nullable(OptionParser::String)),
        (
            TransactionIgnoreUrls,
            OptionMetadata::nullable(OptionParser::WildcardList),
        ),
        (
            TransactionMaxSpans,
            OptionMetadata::new(
                OptionParser::Int(IntOptionParser::new(Some(0), None)),
                ConfigValue::Int(DEFAULT_TRANSACTION_MAX_SPANS),
            ),
        ),
        (
            TransactionSampleRate,
            OptionMetadata::new(
                OptionParser::Float(FloatOptionParser::new(Some(0.0), Some(1.0))),
                ConfigValue::Float(1.0),
            ),
        ),
        (UrlGroups, OptionMetadata::nullable(OptionParser::WildcardList)),
        (VerifyServerCert, bool_option(true)),
    ]
}

fn bool_option(default: bool) -> OptionMetadata {
    OptionMetadata::new(OptionParser::Bool, ConfigValue::Bool(default))
}

fn nullable_log_level_option() -> OptionMetadata {
    OptionMetadata::nullable(OptionParser::LogLevel(log_level_parser()))
}
