//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Locate the configuration file (CLI argument, then `SCREENFLOW_CONFIG`)
//! - Read TOML configuration files
//! - Parse TOML into the AppConfig DTO
//! - Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! **No validation logic, no default value logic.** Accept whatever is in the
//! file; missing values stay absent.

use anyhow::Context;
use std::io::ErrorKind;
use std::path::PathBuf;

use sf_core::AppConfig;

pub const CONFIG_ENV_VAR: &str = "SCREENFLOW_CONFIG";

/// Pick the config path from the first CLI argument or the environment.
pub fn config_path_from(
    mut args: impl Iterator<Item = String>,
    env_value: Option<String>,
) -> Option<PathBuf> {
    args.next()
        .or(env_value)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load configuration from a TOML file
///
/// **NO validation is performed**:
/// - Unknown sections are ignored
/// - Negative durations are treated as absent
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields an empty config.
pub fn load_optional_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let Some(config_path) = config_path else {
        return Ok(AppConfig::default());
    };
    match std::fs::metadata(&config_path) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        _ => load_config(config_path),
    }
}
