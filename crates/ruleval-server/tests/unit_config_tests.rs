//! Unit tests for ServerConfig loading

use ruleval_server::config::{LogFormat, ServerConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.toml",
        r#"
host = "127.0.0.1"
port = 8080
log_level = "debug"
log_format = "json"

[engine]
max_rule_length = 1024
max_depth = 32
"#,
    );

    let config = ServerConfig::load_from(&path).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.engine.max_rule_length, 1024);
    assert_eq!(config.engine.max_depth, 32);
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server.yaml",
        r#"
port: 9000
engine:
  max_power: 1000
"#,
    );

    let config = ServerConfig::load_from(&path).unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.engine.max_power, 1000.0);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server.toml", "");

    let config = ServerConfig::load_from(&path).unwrap();
    let defaults = ServerConfig::default();

    assert_eq!(config.host, defaults.host);
    assert_eq!(config.port, defaults.port);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.engine.max_depth, defaults.engine.max_depth);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "bad_port.toml", "port = 70000\n");
    assert!(ServerConfig::load_from(&path).is_err());

    let path = write_config(&dir, "bad_format.toml", "log_format = \"xml\"\n");
    assert!(ServerConfig::load_from(&path).is_err());

    let path = write_config(&dir, "bad_engine.toml", "[engine]\nmax_depth = 0\n");
    let err = ServerConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("max_depth"));

    let path = write_config(&dir, "deep_engine.toml", "[engine]\nmax_depth = 1000000\n");
    let err = ServerConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("max_depth must be at most"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(ServerConfig::load_from(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server.toml", "[engine]\nmax_string_length = 10\n");

    std::env::set_var("RULEVAL_ENGINE__MAX_STRING_LENGTH", "2048");
    let config = ServerConfig::load_from(&path);
    std::env::remove_var("RULEVAL_ENGINE__MAX_STRING_LENGTH");

    assert_eq!(config.unwrap().engine.max_string_length, 2048);
}

#[test]
fn test_log_directives_cover_every_crate() {
    let config = ServerConfig {
        log_level: "trace".to_string(),
        ..ServerConfig::default()
    };
    let directives = config.log_directives();
    for target in ["ruleval_server", "ruleval_sdk", "ruleval_runtime", "ruleval_parser"] {
        assert!(
            directives.contains(&format!("{}=trace", target)),
            "{} missing from {}",
            target,
            directives
        );
    }
}
