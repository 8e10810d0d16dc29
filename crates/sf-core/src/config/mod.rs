//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No validation logic, no default value calculation.** Missing values stay
//! `None`; the application layer decides what they mean.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Progress file path (path info only, no existence check)
    pub progress_path: Option<PathBuf>,

    /// Minimum latency of every storage access, in milliseconds
    pub storage_latency_ms: Option<u64>,

    /// Display time of feedback screens, in milliseconds
    pub feedback_ms: Option<u64>,

    /// Delay between an action and the view result, in milliseconds
    pub transition_ms: Option<u64>,

    /// Delay after the error screen restores the surface style, in milliseconds
    pub exit_delay_ms: Option<u64>,

    /// Log directory
    pub log_dir: Option<PathBuf>,

    /// Force progress loads to report unreadable storage
    pub storage_unreadable: bool,

    /// Force reloads to report a dead end
    pub reload_dead_end: bool,

    /// Show this single view instead of running the flow
    pub preview_view: Option<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation or default
    /// value logic. Negative numbers are dropped as absent.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));
        let millis = |name: &str, key: &str| {
            section(name, key)
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
        };
        let path = |name: &str, key: &str| {
            section(name, key)
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
        };
        let flag = |name: &str, key: &str| {
            section(name, key)
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        Ok(Self {
            progress_path: path("storage", "progress_path"),
            storage_latency_ms: millis("storage", "latency_ms"),
            feedback_ms: millis("presentation", "feedback_ms"),
            transition_ms: millis("presentation", "transition_ms"),
            exit_delay_ms: millis("presentation", "exit_delay_ms"),
            log_dir: path("logging", "log_dir"),
            storage_unreadable: flag("simulation", "storage_unreadable"),
            reload_dead_end: flag("simulation", "reload_dead_end"),
            preview_view: section("simulation", "preview_view")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [storage]
            progress_path = "/tmp/progress.json"
            latency_ms = 10

            [presentation]
            feedback_ms = 20
            transition_ms = 30
            exit_delay_ms = 40

            [logging]
            log_dir = "/tmp/logs"

            [simulation]
            storage_unreadable = true
            reload_dead_end = true
            preview_view = "main"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.progress_path, Some(PathBuf::from("/tmp/progress.json")));
        assert_eq!(config.storage_latency_ms, Some(10));
        assert_eq!(config.feedback_ms, Some(20));
        assert_eq!(config.transition_ms, Some(30));
        assert_eq!(config.exit_delay_ms, Some(40));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(config.storage_unreadable);
        assert!(config.reload_dead_end);
        assert_eq!(config.preview_view.as_deref(), Some("main"));
    }

    #[test]
    fn from_toml_keeps_missing_values_absent() {
        let value: toml::Value = toml::from_str("[storage]\nlatency_ms = -5\n").unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config, AppConfig::default());
    }
}
