//! Configuration file loading with precedence handling.

use crate::model::LayoutId;
use crate::state::DEFAULT_LAYOUTS;
use crate::store::default_preferences_path;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "RECVIEW_CONFIG";
/// Env var overriding the persistence namespace.
pub const NAMESPACE_ENV: &str = "RECVIEW_NAMESPACE";
/// Env var overriding the default layout.
pub const LAYOUT_ENV: &str = "RECVIEW_LAYOUT";

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "recview";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value {value:?} for {name}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/recview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Preference namespace isolating this page's saved settings.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Layout used when nothing is saved.
    #[serde(default)]
    pub default_layout: Option<LayoutId>,

    /// Layouts offered by the switcher.
    #[serde(default)]
    pub layouts: Option<Vec<LayoutId>>,

    /// Preference file location.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Show checkboxes and the bulk bar.
    #[serde(default)]
    pub enable_bulk_actions: Option<bool>,

    /// Offer the column menu.
    #[serde(default)]
    pub enable_column_toggle: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Preference namespace.
    pub namespace: String,
    /// Layout used when nothing is saved.
    pub default_layout: LayoutId,
    /// Layouts offered by the switcher.
    pub layouts: Vec<LayoutId>,
    /// Preference file location.
    pub preferences_path: PathBuf,
    /// Log file location.
    pub log_file_path: PathBuf,
    /// Show checkboxes and the bulk bar.
    pub enable_bulk_actions: bool,
    /// Offer the column menu.
    pub enable_column_toggle: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_layout: LayoutId::Cards,
            layouts: DEFAULT_LAYOUTS.to_vec(),
            preferences_path: default_preferences_path(),
            log_file_path: default_log_path(),
            enable_bulk_actions: true,
            enable_column_toggle: true,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/recview/recview.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("recview").join("recview.log"),
        None => PathBuf::from("recview.log"),
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

/// `~/.config/recview/config.toml` on Unix, the platform equivalent elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RECVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/recview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns [`ConfigError`] if the chosen file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Apply `RECVIEW_NAMESPACE` and `RECVIEW_LAYOUT` to the resolved config.
///
/// Empty values are ignored.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] when `RECVIEW_LAYOUT` names no layout.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(namespace) = std::env::var(NAMESPACE_ENV) {
        if !namespace.trim().is_empty() {
            config.namespace = namespace;
        }
    }

    if let Ok(raw) = std::env::var(LAYOUT_ENV) {
        if !raw.trim().is_empty() {
            config.default_layout = raw.parse().map_err(|_| ConfigError::InvalidEnv {
                name: LAYOUT_ENV,
                value: raw.clone(),
            })?;
        }
    }

    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        namespace: config.namespace.unwrap_or(defaults.namespace),
        default_layout: config.default_layout.unwrap_or(defaults.default_layout),
        layouts: config.layouts.unwrap_or(defaults.layouts),
        preferences_path: config.preferences_path.unwrap_or(defaults.preferences_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        enable_bulk_actions: config
            .enable_bulk_actions
            .unwrap_or(defaults.enable_bulk_actions),
        enable_column_toggle: config
            .enable_column_toggle
            .unwrap_or(defaults.enable_column_toggle),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    namespace_override: Option<String>,
    layout_override: Option<LayoutId>,
) -> ResolvedConfig {
    if let Some(namespace) = namespace_override {
        config.namespace = namespace;
    }

    if let Some(layout) = layout_override {
        config.default_layout = layout;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
