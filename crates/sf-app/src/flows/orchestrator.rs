//! Flow orchestrator.
//!
//! This module runs flow units and feeds what they observe into the pure
//! flow state machine.

use std::sync::Arc;

use sf_core::ports::{ProgressStorePort, ReloadPort};
use sf_core::view::View;
use sf_core::{FlowInput, FlowState, FlowStateMachine, Progress, SessionOutcome};
use tracing::{debug, info, info_span, warn, Instrument};

use super::{BranchDispatcher, FlowError};
use crate::views::ViewCatalog;

/// Orchestrator that drives one session's screens and side effects.
///
/// Each step runs exactly one flow unit to completion: it shows views,
/// touches the progress store or the reloader, and returns the next state.
/// Only one unit runs at a time, so only one `show` is ever in flight.
pub struct FlowOrchestrator {
    views: ViewCatalog,
    store: Arc<dyn ProgressStorePort>,
    reloader: Arc<dyn ReloadPort>,
    resume: BranchDispatcher<FlowInput>,
}

impl FlowOrchestrator {
    pub fn new(
        views: ViewCatalog,
        store: Arc<dyn ProgressStorePort>,
        reloader: Arc<dyn ReloadPort>,
    ) -> Result<Self, FlowError> {
        let resume = BranchDispatcher::new(View::Main, FlowStateMachine::resume_branches(), &views)?;
        Ok(Self {
            views,
            store,
            reloader,
            resume,
        })
    }

    pub fn views(&self) -> &ViewCatalog {
        &self.views
    }

    /// Start a session at the entry flow.
    pub async fn run(&self) -> Result<SessionOutcome, FlowError> {
        self.run_from(FlowState::Entry).await
    }

    /// Run from `state` until a terminal state is reached.
    pub async fn run_from(&self, state: FlowState) -> Result<SessionOutcome, FlowError> {
        let span = info_span!("flow.session", start = state.name());
        async {
            let mut current = state;
            loop {
                if let FlowState::Finished { outcome } = current {
                    info!(?outcome, "flow session finished");
                    return Ok(outcome);
                }
                current = self.step(current).await?;
            }
        }
        .instrument(span)
        .await
    }

    /// Run the flow unit for `state` and return the state it transitions to.
    ///
    /// A terminal state is returned unchanged without touching any port.
    pub async fn step(&self, state: FlowState) -> Result<FlowState, FlowError> {
        let Some(input) = self.execute(&state).await? else {
            return Ok(state);
        };
        let from = state.name();
        let next = FlowStateMachine::transition(state, input)?;
        info!(from, to = next.name(), "flow state transition");
        Ok(next)
    }

    async fn execute(&self, state: &FlowState) -> Result<Option<FlowInput>, FlowError> {
        let input = match state {
            FlowState::Entry => self.entry().await?,
            FlowState::Onboarding => self.onboarding().await?,
            FlowState::Resume => self.resume.dispatch(&self.views).await?,
            FlowState::Aside => {
                self.views.show(View::Aside).await?;
                FlowInput::AsideDismissed
            }
            FlowState::Deleting => self.delete_progress().await?,
            FlowState::Abort { reason } => {
                self.views
                    .show(View::Error {
                        message: reason.message().to_string(),
                    })
                    .await?;
                let reload = self.reloader.reload().await;
                if let Err(signal) = &reload {
                    warn!(error = %signal, "reload failed");
                }
                FlowInput::ReloadAttempted(reload)
            }
            FlowState::DeadEnd { reason } => {
                self.views
                    .show(View::DeadEnd {
                        reason: reason.message().to_string(),
                    })
                    .await?;
                FlowInput::DeadEndShown
            }
            FlowState::Finished { .. } => return Ok(None),
        };
        Ok(Some(input))
    }

    async fn entry(&self) -> Result<FlowInput, FlowError> {
        let (shown, progress) = tokio::join!(self.views.show(View::Loading), self.store.load());
        shown?;
        debug!(present = progress.is_present(), "progress loaded");
        Ok(FlowInput::ProgressLoaded(progress))
    }

    async fn onboarding(&self) -> Result<FlowInput, FlowError> {
        // Strictly one after another: a screen is never shown before the
        // previous one resolved.
        for view in self.views.intro_sequence() {
            self.views.show(view).await?;
        }

        let progress = Progress::initial();
        let (shown, save) = tokio::join!(self.views.show(View::Saving), self.store.save(&progress));
        shown?;
        // TODO: decide whether a failed save should route to abort instead of resume.
        if let Err(signal) = &save {
            warn!(error = %signal, "saving initial progress failed, continuing");
        }
        Ok(FlowInput::OnboardingFinished { save })
    }

    async fn delete_progress(&self) -> Result<FlowInput, FlowError> {
        let (shown, delete) = tokio::join!(self.views.show(View::Deleting), self.store.delete());
        shown?;
        if let Err(signal) = &delete {
            warn!(error = %signal, "deleting progress failed, restarting anyway");
        }
        Ok(FlowInput::ProgressDeleted { delete })
    }
}
