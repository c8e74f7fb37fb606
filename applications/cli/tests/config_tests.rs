//! Configuration loading and validation

use roster_cli::config::{environment, RosterConfig};
use roster_cli::error::CliError;
use std::collections::HashMap;
use std::path::Path;

fn no_env() -> config::Environment {
    environment().source(Some(HashMap::new()))
}

fn env(vars: &[(&str, &str)]) -> config::Environment {
    let map = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    environment().source(Some(map))
}

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("roster.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = RosterConfig::default();
    assert_eq!(config.client.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.client.connect_timeout_secs, 10);
    assert_eq!(config.storage.database_url, "sqlite://roster.db");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[client]
base_url = "http://localhost:3000"
"#,
    );

    let config = RosterConfig::load_from(Some(&path), no_env()).unwrap();

    assert_eq!(config.client.base_url, "http://localhost:3000");
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.storage, RosterConfig::default().storage);
}

#[test]
fn test_serialized_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut expected = RosterConfig::default();
    expected.client.timeout_secs = 5;
    expected.storage.database_url = "sqlite://custom.db".to_string();

    let path = write_config(dir.path(), &toml::to_string(&expected).unwrap());

    let config = RosterConfig::load_from(Some(&path), no_env()).unwrap();
    assert_eq!(config, expected);
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[client]
base_url = "http://localhost:3000"
timeout_secs = 5
"#,
    );

    let config = RosterConfig::load_from(
        Some(&path),
        env(&[
            ("ROSTER_CLIENT__BASE_URL", "http://directory.internal"),
            ("ROSTER_STORAGE__DATABASE_URL", "sqlite://env.db"),
        ]),
    )
    .unwrap();

    assert_eq!(config.client.base_url, "http://directory.internal");
    assert_eq!(config.client.timeout_secs, 5);
    assert_eq!(config.storage.database_url, "sqlite://env.db");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    match RosterConfig::load_from(Some(&path), no_env()) {
        Err(CliError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = RosterConfig::default();
    config.client.base_url = String::new();
    assert!(config.validate().is_err());

    let mut config = RosterConfig::default();
    config.client.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());

    let mut config = RosterConfig::default();
    config.client.timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = RosterConfig::default();
    config.storage.database_url = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_client_config_carries_timeouts() {
    let mut config = RosterConfig::default();
    config.client.timeout_secs = 7;
    config.client.connect_timeout_secs = 3;

    let client = config.client_config();
    assert_eq!(client.url, config.client.base_url);
    assert_eq!(client.timeout, std::time::Duration::from_secs(7));
    assert_eq!(client.connect_timeout, std::time::Duration::from_secs(3));
}
