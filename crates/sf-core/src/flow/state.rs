use serde::Serialize;

use super::ErrorSignal;
use crate::progress::ProgressToken;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionOutcome {
    /// A reload was requested; the host is expected to start a new session.
    Reloaded,
    /// The session ended on the dead-end screen.
    DeadEnd { reason: ErrorSignal },
}

/// Flow units of a session.
///
/// Session flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowState {
    /// Load progress while showing the loading screen, then route.
    Entry,
    /// Introductory screens, then save the initial progress.
    Onboarding,
    /// Main screen; branches on the chosen action.
    Resume,
    /// Informational aside, then back to resume.
    Aside,
    /// Delete progress while showing the deleting screen, then restart.
    Deleting,
    /// Storage error screen followed by a reload attempt.
    Abort { reason: ErrorSignal },
    /// Terminal "no recovery" screen.
    DeadEnd { reason: ErrorSignal },
    /// Nothing left to run.
    Finished { outcome: SessionOutcome },
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Entry => "entry",
            FlowState::Onboarding => "onboarding",
            FlowState::Resume => "resume",
            FlowState::Aside => "aside",
            FlowState::Deleting => "deleting",
            FlowState::Abort { .. } => "abort",
            FlowState::DeadEnd { .. } => "dead_end",
            FlowState::Finished { .. } => "finished",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Finished { .. })
    }
}

/// What a flow unit observed; drives the transition to the next unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FlowInput {
    ProgressLoaded(ProgressToken),
    /// The save result is carried but not inspected by the transition.
    OnboardingFinished { save: Result<(), ErrorSignal> },
    AsideRequested,
    DeleteRequested,
    AsideDismissed,
    ProgressDeleted { delete: Result<(), ErrorSignal> },
    ReloadAttempted(Result<(), ErrorSignal>),
    DeadEndShown,
}
