//! Fault-injection switches and the store decorator that honors them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sf_core::ports::{ProgressStorePort, SimulationPort};
use sf_core::{AppConfig, ErrorSignal, Progress, ProgressToken};
use tracing::{debug, info};

/// Simulation switches that can be flipped while a session runs.
#[derive(Debug, Default)]
pub struct RuntimeSimulation {
    storage_unreadable: AtomicBool,
    reload_dead_end: AtomicBool,
}

impl RuntimeSimulation {
    pub fn new(storage_unreadable: bool, reload_dead_end: bool) -> Self {
        Self {
            storage_unreadable: AtomicBool::new(storage_unreadable),
            reload_dead_end: AtomicBool::new(reload_dead_end),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.storage_unreadable, config.reload_dead_end)
    }

    pub fn set_storage_unreadable(&self, enabled: bool) {
        info!(enabled, "storage_unreadable simulation switched");
        self.storage_unreadable.store(enabled, Ordering::SeqCst);
    }

    pub fn set_reload_dead_end(&self, enabled: bool) {
        info!(enabled, "reload_dead_end simulation switched");
        self.reload_dead_end.store(enabled, Ordering::SeqCst);
    }
}

impl SimulationPort for RuntimeSimulation {
    fn storage_unreadable(&self) -> bool {
        self.storage_unreadable.load(Ordering::SeqCst)
    }

    fn reload_dead_end(&self) -> bool {
        self.reload_dead_end.load(Ordering::SeqCst)
    }
}

/// Progress store that reports `Unreadable` on load while the storage switch
/// is on. Writes always reach the wrapped store.
pub struct SimulatedProgressStore<S> {
    inner: S,
    simulation: Arc<dyn SimulationPort>,
}

impl<S: ProgressStorePort> SimulatedProgressStore<S> {
    pub fn new(inner: S, simulation: Arc<dyn SimulationPort>) -> Self {
        Self { inner, simulation }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ProgressStorePort> ProgressStorePort for SimulatedProgressStore<S> {
    async fn load(&self) -> ProgressToken {
        if self.simulation.storage_unreadable() {
            debug!("simulating unreadable progress store");
            return ProgressToken::Unreadable;
        }
        self.inner.load().await
    }

    async fn save(&self, progress: &Progress) -> Result<(), ErrorSignal> {
        self.inner.save(progress).await
    }

    async fn delete(&self) -> Result<(), ErrorSignal> {
        self.inner.delete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileProgressStore;
    use tempfile::TempDir;

    fn store(dir: &TempDir, simulation: Arc<RuntimeSimulation>) -> SimulatedProgressStore<FileProgressStore> {
        SimulatedProgressStore::new(
            FileProgressStore::new(dir.path().join("progress.json")),
            simulation,
        )
    }

    #[test]
    fn switches_are_independent() {
        let simulation = RuntimeSimulation::new(true, false);

        assert!(simulation.storage_unreadable());
        assert!(!simulation.reload_dead_end());

        simulation.set_reload_dead_end(true);
        simulation.set_storage_unreadable(false);

        assert!(!simulation.storage_unreadable());
        assert!(simulation.reload_dead_end());
    }

    #[test]
    fn from_config_copies_switches() {
        let config = AppConfig {
            reload_dead_end: true,
            ..AppConfig::default()
        };

        let simulation = RuntimeSimulation::from_config(&config);

        assert!(!simulation.storage_unreadable());
        assert!(simulation.reload_dead_end());
    }

    #[tokio::test]
    async fn unreadable_switch_masks_stored_progress() {
        let temp_dir = TempDir::new().unwrap();
        let simulation = Arc::new(RuntimeSimulation::default());
        let store = store(&temp_dir, simulation.clone());
        store.save(&Progress::initial()).await.unwrap();

        simulation.set_storage_unreadable(true);
        assert_eq!(store.load().await, ProgressToken::Unreadable);

        simulation.set_storage_unreadable(false);
        assert_eq!(
            store.load().await,
            ProgressToken::Present(Progress::initial())
        );
    }

    #[tokio::test]
    async fn writes_pass_through_while_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir, Arc::new(RuntimeSimulation::new(true, false)));

        store.save(&Progress::initial()).await.unwrap();

        assert_eq!(
            store.inner().load().await,
            ProgressToken::Present(Progress::initial())
        );
        assert_eq!(store.delete().await, Ok(()));
    }
}
