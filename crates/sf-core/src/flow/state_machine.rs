//! Flow state machine.
//!
//! Defines a pure state transition function for the session flow graph.

use super::{BranchTable, ErrorSignal, FlowInput, FlowState, SessionOutcome};
use crate::progress::ProgressToken;
use crate::view::ActionKey;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("flow state `{}` does not accept input {input:?}", .state.name())]
    Unexpected { state: FlowState, input: FlowInput },
}

/// Pure flow state machine.
///
/// Holds no state of its own and performs no I/O.
pub struct FlowStateMachine;

impl FlowStateMachine {
    pub fn transition(state: FlowState, input: FlowInput) -> Result<FlowState, TransitionError> {
        match (state, input) {
            (FlowState::Entry, FlowInput::ProgressLoaded(token)) => Ok(match token {
                ProgressToken::Absent => FlowState::Onboarding,
                ProgressToken::Unreadable => FlowState::Abort {
                    reason: ErrorSignal::StorageUnreadable,
                },
                ProgressToken::Present(_) => FlowState::Resume,
            }),
            // A failed save still proceeds to resume; the result is not inspected.
            (FlowState::Onboarding, FlowInput::OnboardingFinished { .. }) => Ok(FlowState::Resume),
            (FlowState::Resume, FlowInput::AsideRequested) => Ok(FlowState::Aside),
            (FlowState::Resume, FlowInput::DeleteRequested) => Ok(FlowState::Deleting),
            (FlowState::Aside, FlowInput::AsideDismissed) => Ok(FlowState::Resume),
            (FlowState::Deleting, FlowInput::ProgressDeleted { .. }) => Ok(FlowState::Entry),
            (FlowState::Abort { .. }, FlowInput::ReloadAttempted(Ok(()))) => {
                Ok(FlowState::Finished {
                    outcome: SessionOutcome::Reloaded,
                })
            }
            (FlowState::Abort { .. }, FlowInput::ReloadAttempted(Err(reason)))
                if reason.is_terminal() =>
            {
                Ok(FlowState::DeadEnd { reason })
            }
            // Only a dead-end signal is routed further; any other reload failure ends the session.
            (FlowState::Abort { .. }, FlowInput::ReloadAttempted(Err(_))) => {
                Ok(FlowState::Finished {
                    outcome: SessionOutcome::Reloaded,
                })
            }
            (FlowState::DeadEnd { reason }, FlowInput::DeadEndShown) => Ok(FlowState::Finished {
                outcome: SessionOutcome::DeadEnd { reason },
            }),
            (state, input) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(state = state.name(), ?input, "flow transition rejected");
                Err(TransitionError::Unexpected { state, input })
            }
        }
    }

    /// Outgoing branches of [`FlowState::Resume`], keyed by the main view's actions.
    pub fn resume_branches() -> BranchTable<FlowInput> {
        BranchTable::new()
            .on(ActionKey::ContinueSomething, FlowInput::AsideRequested)
            .on(ActionKey::DeleteProgress, FlowInput::DeleteRequested)
    }
}
