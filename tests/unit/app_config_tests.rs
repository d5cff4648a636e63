/*!
 * Tests for application configuration
 */

use subrecut::app_config::{Config, LogLevel};

/// Test the default configuration values
#[test]
fn test_config_default_withNoOverrides_shouldUseConventionalDirs() {
    let config = Config::default();

    assert_eq!(config.subtitles_dir, "subtitles");
    assert_eq!(config.timecodes_dir, "timecodes");
    assert_eq!(config.output_dir, "synced");
    assert_eq!(config.log_level, LogLevel::Info);

    assert_eq!(config.sync.lead_in_ms, 1000);
    assert_eq!(config.sync.end_overrun_ms, 200);
    assert_eq!(config.sync.tail_window_ms, 200);
    assert_eq!(config.sync.tail_overrun_ms, 2000);
    assert_eq!(config.sync.concurrent_pairs, 1);
}

/// Test that a partial config file fills missing fields with defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "output_dir": "out", "sync": { "lead_in_ms": 1500 } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.output_dir, "out");
    assert_eq!(config.sync.lead_in_ms, 1500);
    // untouched fields keep their defaults
    assert_eq!(config.subtitles_dir, "subtitles");
    assert_eq!(config.sync.end_overrun_ms, 200);
}

/// Test that the log level serializes lowercase
#[test]
fn test_config_serialize_withDebugLevel_shouldUseLowercase() {
    let mut config = Config::default();
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""log_level":"debug""#));
}

/// Test that a default config round-trips through JSON
#[test]
fn test_config_roundtrip_withDefaultConfig_shouldSurviveSerde() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.subtitles_dir, config.subtitles_dir);
    assert_eq!(parsed.sync, config.sync);
}

/// Test validation of required values
#[test]
fn test_config_validate_withBadValues_shouldFail() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.subtitles_dir = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.sync.lead_in_ms = -1;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.sync.concurrent_pairs = 0;
    assert!(config.validate().is_err());
}
