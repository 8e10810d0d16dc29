//! Tracing configuration for screenflow
//!
//! Stdout is the presentation surface, so log records never go there. They
//! are written to a log file through a non-blocking `tracing-appender`
//! writer, or to stderr when the log directory cannot be created.

use std::path::{Path, PathBuf};
use std::{fs, io, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

pub const LOG_FILE_NAME: &str = "screenflow.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// Development logs the workspace crates at debug level, production at info.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        ["screenflow", "screenflow_lib", "sf_core", "sf_app", "sf_infra"]
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives
}

/// Directory used when the config names none.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("screenflow").join("logs"))
}

/// Initialize the tracing subscriber
///
/// - **Environment filter**: respects `RUST_LOG`, with per-crate defaults
/// - **Format**: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
///
/// Call once in `main` before the first session starts.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let writer = match log_dir.or_else(default_log_dir) {
        Some(dir) => match build_file_writer(&dir) {
            Ok(writer) => BoxMakeWriter::new(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
                BoxMakeWriter::new(io::stderr)
            }
        },
        None => BoxMakeWriter::new(io::stderr),
    };

    let layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    registry().with(env_filter).with(layer).try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
