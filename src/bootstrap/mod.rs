//! Host bootstrap: configuration, logging, wiring and the session loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{config_path_from, load_config, load_optional_config, CONFIG_ENV_VAR};
pub use run::{preview, run_sessions, ExitReason};
pub use wiring::{wire_dependencies, AppDeps, WiringError, WiringResult};
