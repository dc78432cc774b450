use std::time::Duration;

use virtuwellness_cli::config::{load_config, parse_config, save_config, AppConfig};
use virtuwellness_cli::logging::LogFormat;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(Some(dir.path().join("config.json").as_path())).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.model_timeout(), Duration::from_millis(250));
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn parses_current_version() {
    let config = parse_config(
        r#"{
            "config_version": 1,
            "normalize_to": 10.0,
            "model_path": "/opt/models/mood.json",
            "model_timeout_ms": 100,
            "log_format": "json"
        }"#,
    )
    .unwrap();
    assert_eq!(config.normalize_to, Some(10.0));
    assert_eq!(config.model_timeout_ms, 100);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.model_path.is_some());
}

#[test]
fn migrates_unversioned_config() {
    let config = parse_config(r#"{ "normalized_scale": true }"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.normalize_to, Some(10.0));

    let config = parse_config(r#"{ "normalized_scale": false }"#).unwrap();
    assert_eq!(config.normalize_to, None);
}

#[test]
fn rejects_newer_version() {
    let err = parse_config(r#"{ "config_version": 9 }"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn rejects_invalid_values() {
    assert!(parse_config(r#"{ "config_version": 1, "normalize_to": -1.0 }"#).is_err());
    assert!(parse_config(r#"{ "config_version": 1, "model_timeout_ms": 0 }"#).is_err());
    assert!(parse_config("[]").is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = AppConfig {
        normalize_to: Some(10.0),
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(Some(path.as_path())).unwrap(), config);
}
