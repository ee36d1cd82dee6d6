//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LoadFailurePolicy, MaydayConfig};
use mayday_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_mayday_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[window]
title = "App crashed"
width = 720

[lifecycle]
on_load_failure = "stay-hidden"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "App crashed");
    assert_eq!(config.window.width, 720);
    assert_eq!(config.lifecycle.on_load_failure, LoadFailurePolicy::StayHidden);
    // Defaults preserved
    assert_eq!(config.window.height, 500);
    assert_eq!(config.window.background, "#ffffff");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Too small"
width = 100
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.width, 600);
    assert_eq!(config.window.title, "Crash Report");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mayday").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Crash Report");
    assert_eq!(config.lifecycle.on_load_failure, LoadFailurePolicy::Quit);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: MaydayConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.window.title, "Crash Report");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("mayday"));
        assert!(path_str.ends_with("config.toml"));
    }
}
