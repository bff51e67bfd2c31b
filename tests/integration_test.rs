//! Integration tests for apm-agent-config

use std::io::Write;

use apm_agent_config::*;
use temp_env::with_vars;

#[test]
fn test_defaults_with_nothing_configured() {
    let registry = all_options_metadata();
    let snapshot_source = MapRawSnapshotSource::default();
    let raw = snapshot_source.current_snapshot(&[]);
    let mut logger = StandardResolveLogger;
    let resolved = resolve(&registry, raw.as_ref(), &mut logger);
    let config = ConfigSnapshot::from_resolved(&resolved);

    assert!(config.enabled);
    assert!(config.verify_server_cert);
    assert_eq!(config.service_name, None);
    assert_eq!(config.server_timeout, 30_000.0);
    assert_eq!(config.transaction_sample_rate, 1.0);
    assert_eq!(config.effective_log_level(), LogLevel::Info);
}

#[test]
fn test_full_chain_env_only() {
    let vars = vec![
        ("ELASTIC_APM_SERVICE_NAME", Some("billing")),
        ("ELASTIC_APM_SERVICE_VERSION", Some("1.4.2")),
        ("ELASTIC_APM_SERVER_TIMEOUT", Some("10s")),
        ("ELASTIC_APM_TRANSACTION_SAMPLE_RATE", Some("0.25")),
        ("ELASTIC_APM_LOG_LEVEL", Some("debug")),
        ("ELASTIC_APM_SANITIZE_FIELD_NAMES", Some("*secret*, password")),
        ("ELASTIC_APM_GLOBAL_LABELS", Some("dept=ops,tier=1,canary=true")),
    ];

    with_vars(vars, || {
        let config = ConfigLoader::new().from_env();

        assert_eq!(config.service_name.as_deref(), Some("billing"));
        assert_eq!(config.service_version.as_deref(), Some("1.4.2"));
        assert_eq!(config.server_timeout, 10_000.0);
        assert_eq!(config.transaction_sample_rate, 0.25);
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert_eq!(config.effective_log_level(), LogLevel::Debug);

        let sanitize = &config.sanitize_field_names;
        assert_eq!(sanitize.len(), 2);
        assert!(wildcard::match_any(sanitize, "my_secret_field").is_some());
        assert!(wildcard::match_any(sanitize, "password").is_some());
        assert!(wildcard::match_any(sanitize, "username").is_none());

        let labels = config.global_labels.as_ref().unwrap();
        assert_eq!(labels["dept"], LabelValue::String("ops".to_string()));
        assert_eq!(labels["tier"], LabelValue::Int(1));
        assert_eq!(labels["canary"], LabelValue::Bool(true));
    });
}

#[test]
fn test_ini_file_beats_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "; agent settings").unwrap();
    writeln!(file, "elastic_apm.service_name = \"from-ini\"").unwrap();
    writeln!(file, "elastic_apm.enabled = off").unwrap();
    writeln!(file, "elastic_apm.transaction_max_spans = 50").unwrap();

    let vars = vec![
        ("ELASTIC_APM_SERVICE_NAME", Some("from-env")),
        ("ELASTIC_APM_HOSTNAME", Some("web-7")),
    ];

    with_vars(vars, || {
        let config = ConfigLoader::new().load(Some(file.path())).unwrap();

        // Ini wins where both sources define an option.
        assert_eq!(config.service_name.as_deref(), Some("from-ini"));
        assert!(!config.enabled);
        assert_eq!(config.transaction_max_spans, 50);
        // Env fills the gaps.
        assert_eq!(config.hostname.as_deref(), Some("web-7"));
    });
}

#[test]
fn test_bad_values_degrade_to_defaults_end_to_end() {
    let vars = vec![
        ("ELASTIC_APM_SERVER_TIMEOUT", Some("soon")),
        ("ELASTIC_APM_TRANSACTION_SAMPLE_RATE", Some("1e2")),
        ("ELASTIC_APM_TRANSACTION_MAX_SPANS", Some("-5")),
        ("ELASTIC_APM_SERVICE_NAME", Some("still-works")),
    ];

    with_vars(vars, || {
        let config = ConfigLoader::new().from_env();

        assert_eq!(config.server_timeout, 30_000.0);
        assert_eq!(config.transaction_sample_rate, 1.0);
        assert_eq!(config.transaction_max_spans, 500);
        assert_eq!(config.service_name.as_deref(), Some("still-works"));
    });
}

#[test]
fn test_resolution_logs_each_failure_once() {
    struct CountingLogger {
        failures: Vec<String>,
    }

    impl ResolveLogger for CountingLogger {
        fn used_default(&mut self, _option_name: &str, _default: &ConfigValue) {}
        fn parsed(&mut self, _option_name: &str, _raw: &str, _value: &ConfigValue) {}
        fn parse_failed(
            &mut self,
            option_name: &str,
            _raw: &str,
            _default: &ConfigValue,
            _error: &ParseError,
        ) {
            self.failures.push(option_name.to_string());
        }
    }

    let registry = all_options_metadata();
    let source = MapRawSnapshotSource::from_pairs([
        ("enabled", "maybe"),
        ("service_name", "fine"),
    ]);
    let raw = source.current_snapshot(&[]);
    let mut logger = CountingLogger { failures: vec![] };
    let resolved = resolve(&registry, raw.as_ref(), &mut logger);

    assert_eq!(logger.failures, vec!["enabled".to_string()]);
    assert_eq!(resolved.len(), OptionId::ALL.len());
}

#[test]
fn test_duration_grammar_end_to_end() {
    let vars = vec![
        ("ELASTIC_APM_PROFILING_INFERRED_SPANS_MIN_DURATION", Some("250ms")),
        // 500ms is below the 1s minimum for the sampling interval; it must
        // fall back to the 1s default.
        ("ELASTIC_APM_PROFILING_INFERRED_SPANS_SAMPLING_INTERVAL", Some("500ms")),
    ];

    with_vars(vars, || {
        let config = ConfigLoader::new().from_env();
        assert_eq!(config.profiling_inferred_spans_min_duration, 250.0);
        assert_eq!(config.profiling_inferred_spans_sampling_interval, 1000.0);
    });
}

#[test]
fn test_log_level_prefix_matching_end_to_end() {
    with_vars(
        vec![
            ("ELASTIC_APM_LOG_LEVEL", Some("warn")),
            ("ELASTIC_APM_LOG_LEVEL_STDERR", Some("t")),
        ],
        || {
            let config = ConfigLoader::new().from_env();
            assert_eq!(config.log_level, Some(LogLevel::Warning));
            assert_eq!(config.log_level_stderr, Some(LogLevel::Trace));
            assert_eq!(config.effective_log_level(), LogLevel::Trace);
        },
    );
}

#[test]
fn test_snapshot_json_dump() {
    let config = ConfigLoader::new().load(None::<&std::path::Path>).unwrap();
    let json = config.to_json().unwrap();
    assert!(json.contains("\"enabled\""));
    assert!(json.contains("\"sanitize_field_names\""));
}
