//! Resolution of configured durations.
//!
//! The config DTO only carries what the file said; this is where absent
//! values get their defaults.

use std::time::Duration;

use sf_core::AppConfig;

pub const DEFAULT_STORAGE_LATENCY_MS: u64 = 2000;
pub const DEFAULT_FEEDBACK_MS: u64 = 1500;
pub const DEFAULT_TRANSITION_MS: u64 = 500;
pub const DEFAULT_EXIT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Minimum latency of every storage access.
    pub storage_latency: Duration,
    /// How long feedback screens stay up.
    pub feedback: Duration,
    /// Delay between an action and the view result.
    pub transition: Duration,
    /// Pause after the error screen restores the surface style.
    pub exit_delay: Duration,
}

impl Timings {
    pub fn resolve(config: &AppConfig) -> Self {
        let ms = |value: Option<u64>, default: u64| Duration::from_millis(value.unwrap_or(default));
        Self {
            storage_latency: ms(config.storage_latency_ms, DEFAULT_STORAGE_LATENCY_MS),
            feedback: ms(config.feedback_ms, DEFAULT_FEEDBACK_MS),
            transition: ms(config.transition_ms, DEFAULT_TRANSITION_MS),
            exit_delay: ms(config.exit_delay_ms, DEFAULT_EXIT_DELAY_MS),
        }
    }

    /// No waiting anywhere.
    pub fn immediate() -> Self {
        Self {
            storage_latency: Duration::ZERO,
            feedback: Duration::ZERO,
            transition: Duration::ZERO,
            exit_delay: Duration::ZERO,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::resolve(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_for_missing_values() {
        let timings = Timings::resolve(&AppConfig::default());
        assert_eq!(timings.storage_latency, Duration::from_millis(2000));
        assert_eq!(timings.feedback, Duration::from_millis(1500));
        assert_eq!(timings.transition, Duration::from_millis(500));
        assert_eq!(timings.exit_delay, Duration::from_millis(500));
    }

    #[test]
    fn resolve_keeps_explicit_zero() {
        let config = AppConfig {
            storage_latency_ms: Some(0),
            feedback_ms: Some(5),
            ..AppConfig::default()
        };
        let timings = Timings::resolve(&config);
        assert_eq!(timings.storage_latency, Duration::ZERO);
        assert_eq!(timings.feedback, Duration::from_millis(5));
    }
}
