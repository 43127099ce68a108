//! Configuration file loading with precedence handling.

use crate::model::{ExploreMode, DEFAULT_MAX_LINES};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/lokiq/config.toml`:
///
/// ```toml
/// max_lines = 500
/// explore_mode = "logs"
///
/// [labels]
/// job = ["api", "web"]
/// app = ["loki"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Datasource default line cap. `0` means "use the built-in default".
    #[serde(default)]
    pub max_lines: Option<u64>,

    /// Explore mode on startup ("logs" or "metrics").
    #[serde(default)]
    pub explore_mode: Option<ExploreMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Label keys and their values, served by the static label source.
    #[serde(default)]
    pub labels: Option<BTreeMap<String, Vec<String>>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Datasource default line cap. Always positive.
    pub max_lines: u64,
    /// Explore mode on startup.
    pub explore_mode: ExploreMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Label table for the static label source.
    pub labels: BTreeMap<String, Vec<String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            explore_mode: ExploreMode::Logs,
            log_file_path: default_log_path(),
            labels: BTreeMap::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/lokiq/lokiq.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("lokiq").join("lokiq.log")
    } else {
        PathBuf::from("lokiq.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/lokiq/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lokiq").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOKIQ_CONFIG` environment variable
/// 3. Default path `~/.config/lokiq/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LOKIQ_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LOKIQ_MAX_LINES`: positive integer line cap
/// - `LOKIQ_EXPLORE_MODE`: "logs" or "metrics"
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("LOKIQ_MAX_LINES") {
        match raw.trim().parse::<u64>() {
            Ok(n) if n > 0 => config.max_lines = n,
            _ => warn!(value = %raw, "Ignoring invalid LOKIQ_MAX_LINES"),
        }
    }

    if let Ok(raw) = std::env::var("LOKIQ_EXPLORE_MODE") {
        match raw.parse::<ExploreMode>() {
            Ok(mode) => config.explore_mode = mode,
            Err(e) => warn!(error = %e, "Ignoring invalid LOKIQ_EXPLORE_MODE"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// default. A configured `max_lines` of 0 falls back to the default cap.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_lines: config
            .max_lines
            .filter(|&n| n > 0)
            .unwrap_or(defaults.max_lines),
        explore_mode: config.explore_mode.unwrap_or(defaults.explore_mode),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        labels: config.labels.unwrap_or(defaults.labels),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    max_lines_override: Option<u64>,
    mode_override: Option<ExploreMode>,
) -> ResolvedConfig {
    if let Some(max_lines) = max_lines_override.filter(|&n| n > 0) {
        config.max_lines = max_lines;
    }

    if let Some(mode) = mode_override {
        config.explore_mode = mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
