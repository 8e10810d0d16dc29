//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (progress file, terminal, style surface)
//! - Inject them into the flow orchestrator through the port traits
//!
//! ## Prohibited
//!
//! **No flow decisions.** This module assembles; which screen comes next is
//! decided by the orchestrator alone.

use std::path::PathBuf;
use std::sync::Arc;

use sf_app::{FlowError, FlowOrchestrator, Timings, ViewCatalog};
use sf_core::ports::SimulationPort;
use sf_core::AppConfig;
use sf_infra::{
    FileProgressStore, InMemoryStyleSurface, RuntimeSimulation, SessionReloader,
    SimulatedProgressStore, TerminalPresenter,
};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("no data directory available for the progress file; set [storage] progress_path")]
    NoDataDir,

    #[error("flow assembly failed: {0}")]
    Flow(#[from] FlowError),
}

/// Everything the host needs to run sessions.
pub struct AppDeps {
    pub orchestrator: FlowOrchestrator,
    pub simulation: Arc<RuntimeSimulation>,
    pub reloader: Arc<SessionReloader>,
    pub progress_path: PathBuf,
}

fn resolve_progress_store(config: &AppConfig) -> WiringResult<FileProgressStore> {
    match &config.progress_path {
        Some(path) => Ok(FileProgressStore::new(path.clone())),
        None => dirs::data_local_dir()
            .map(|dir| FileProgressStore::with_defaults(dir.join("screenflow")))
            .ok_or(WiringError::NoDataDir),
    }
}

/// Assemble the session over the given terminal streams.
pub fn wire_dependencies<R, W>(config: &AppConfig, reader: R, writer: W) -> WiringResult<AppDeps>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let timings = Timings::resolve(config);
    let simulation = Arc::new(RuntimeSimulation::from_config(config));
    let surface = Arc::new(InMemoryStyleSurface::new());
    let presenter = Arc::new(TerminalPresenter::new(reader, writer).with_surface(surface.clone()));

    let file_store = resolve_progress_store(config)?.with_latency(timings.storage_latency);
    let progress_path = file_store.path().to_path_buf();
    let store = Arc::new(SimulatedProgressStore::new(
        file_store,
        simulation.clone() as Arc<dyn SimulationPort>,
    ));
    let reloader = Arc::new(SessionReloader::new(simulation.clone()));

    let views = ViewCatalog::new(presenter, surface, timings);
    let orchestrator = FlowOrchestrator::new(views, store, reloader.clone())?;

    info!(
        progress_path = %progress_path.display(),
        ?timings,
        storage_unreadable = simulation.storage_unreadable(),
        reload_dead_end = simulation.reload_dead_end(),
        "dependencies wired"
    );

    Ok(AppDeps {
        orchestrator,
        simulation,
        reloader,
        progress_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[test]
    fn configured_progress_path_is_used() {
        let config = AppConfig {
            progress_path: Some(PathBuf::from("/tmp/screenflow-test/progress.json")),
            ..AppConfig::default()
        };

        let deps = wire_dependencies(&config, BufReader::new(&b""[..]), Vec::new()).unwrap();

        assert_eq!(
            deps.progress_path,
            PathBuf::from("/tmp/screenflow-test/progress.json")
        );
        assert_eq!(deps.reloader.reloads(), 0);
    }

    #[test]
    fn simulation_switches_follow_config() {
        let config = AppConfig {
            progress_path: Some(PathBuf::from("progress.json")),
            storage_unreadable: true,
            ..AppConfig::default()
        };

        let deps = wire_dependencies(&config, BufReader::new(&b""[..]), Vec::new()).unwrap();

        assert!(deps.simulation.storage_unreadable());
        assert!(!deps.simulation.reload_dead_end());
    }
}
