//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_lokiq_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("lokiq") && path_str.ends_with("config.toml"),
            "Path should contain 'lokiq' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_lokiq_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("lokiq.log"),
        "Default log path should end with 'lokiq.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("lokiq_test_config.toml");

    let toml_content = r#"
max_lines = 250
explore_mode = "metrics"
log_file_path = "/tmp/lokiq-test.log"

[labels]
job = ["api", "web"]
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.max_lines, Some(250));
    assert_eq!(config.explore_mode, Some(ExploreMode::Metrics));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/lokiq-test.log")));
    let labels = config.labels.expect("labels table");
    assert_eq!(labels["job"], vec!["api".to_string(), "web".to_string()]);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("lokiq_test_invalid.toml");
    fs::write(&config_path, "max_lines = [not toml").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("lokiq_test_unknown_key.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_explore_mode() {
    let config_path = env::temp_dir().join("lokiq_test_bad_mode.toml");
    fs::write(&config_path, "explore_mode = \"traces\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

// ===== merge_config =====

#[test]
fn merge_without_file_returns_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn default_max_lines_is_datasource_default() {
    assert_eq!(ResolvedConfig::default().max_lines, 1000);
    assert_eq!(ResolvedConfig::default().explore_mode, ExploreMode::Logs);
}

#[test]
fn merge_uses_file_values() {
    let file = ConfigFile {
        max_lines: Some(50),
        explore_mode: Some(ExploreMode::Metrics),
        log_file_path: None,
        labels: None,
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.max_lines, 50);
    assert_eq!(resolved.explore_mode, ExploreMode::Metrics);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_treats_zero_max_lines_as_unset() {
    let file = ConfigFile {
        max_lines: Some(0),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(file)).max_lines, 1000);
}

// ===== env overrides =====

#[test]
#[serial(env)]
fn env_overrides_max_lines_and_mode() {
    env::set_var("LOKIQ_MAX_LINES", "75");
    env::set_var("LOKIQ_EXPLORE_MODE", "metrics");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("LOKIQ_MAX_LINES");
    env::remove_var("LOKIQ_EXPLORE_MODE");

    assert_eq!(config.max_lines, 75);
    assert_eq!(config.explore_mode, ExploreMode::Metrics);
}

#[test]
#[serial(env)]
fn env_ignores_invalid_values() {
    env::set_var("LOKIQ_MAX_LINES", "lots");
    env::set_var("LOKIQ_EXPLORE_MODE", "traces");

    let config = apply_env_overrides(ResolvedConfig::default());

    env::remove_var("LOKIQ_MAX_LINES");
    env::remove_var("LOKIQ_EXPLORE_MODE");

    assert_eq!(config, ResolvedConfig::default());
}

#[test]
#[serial(env)]
fn config_env_var_selects_file() {
    let config_path = env::temp_dir().join("lokiq_test_env_config.toml");
    fs::write(&config_path, "max_lines = 42\n").expect("Failed to write test config");
    env::set_var("LOKIQ_CONFIG", &config_path);

    let result = load_config_with_precedence(None);

    env::remove_var("LOKIQ_CONFIG");
    fs::remove_file(&config_path).ok();

    let config = result.expect("load").expect("file present");
    assert_eq!(config.max_lines, Some(42));
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_var() {
    env::set_var("LOKIQ_CONFIG", "/nonexistent/env/config.toml");
    let config_path = env::temp_dir().join("lokiq_test_explicit_config.toml");
    fs::write(&config_path, "max_lines = 7\n").expect("Failed to write test config");

    let result = load_config_with_precedence(Some(config_path.clone()));

    env::remove_var("LOKIQ_CONFIG");
    fs::remove_file(&config_path).ok();

    assert_eq!(result.expect("load").expect("file present").max_lines, Some(7));
}

// ===== CLI overrides =====

#[test]
fn cli_overrides_win() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(20),
        Some(ExploreMode::Metrics),
    );
    assert_eq!(config.max_lines, 20);
    assert_eq!(config.explore_mode, ExploreMode::Metrics);
}

#[test]
fn cli_without_flags_keeps_config() {
    let base = ResolvedConfig {
        max_lines: 300,
        ..ResolvedConfig::default()
    };
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn cli_zero_max_lines_is_ignored() {
    let config = apply_cli_overrides(ResolvedConfig::default(), Some(0), None);
    assert_eq!(config.max_lines, 1000);
}
