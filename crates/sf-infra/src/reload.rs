//! Reload adapter.
//!
//! A reload ends the current session so the host can start a fresh one from
//! entry. With the dead-end switch on, the reload itself fails.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sf_core::ports::{ReloadPort, SimulationPort};
use sf_core::ErrorSignal;
use tracing::{info, warn};

pub struct SessionReloader {
    simulation: Arc<dyn SimulationPort>,
    reloads: AtomicUsize,
}

impl SessionReloader {
    pub fn new(simulation: Arc<dyn SimulationPort>) -> Self {
        Self {
            simulation,
            reloads: AtomicUsize::new(0),
        }
    }

    /// Number of reloads granted so far.
    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReloadPort for SessionReloader {
    async fn reload(&self) -> Result<(), ErrorSignal> {
        if self.simulation.reload_dead_end() {
            warn!("reload refused, session reached a dead end");
            return Err(ErrorSignal::DeadEnd);
        }
        let count = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        info!(count, "reload granted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuntimeSimulation;

    #[tokio::test]
    async fn reload_succeeds_and_counts() {
        let reloader = SessionReloader::new(Arc::new(RuntimeSimulation::default()));

        assert_eq!(reloader.reload().await, Ok(()));
        assert_eq!(reloader.reload().await, Ok(()));
        assert_eq!(reloader.reloads(), 2);
    }

    #[tokio::test]
    async fn dead_end_switch_fails_reload() {
        let simulation = Arc::new(RuntimeSimulation::default());
        let reloader = SessionReloader::new(simulation.clone());

        simulation.set_reload_dead_end(true);

        assert_eq!(reloader.reload().await, Err(ErrorSignal::DeadEnd));
        assert_eq!(reloader.reloads(), 0);
    }
}
