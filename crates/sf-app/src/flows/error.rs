use sf_core::ports::PresentationError;
use sf_core::{TransitionError, UnhandledKeyError};

/// Errors produced while running flows.
///
/// Storage and reload failures are not here: they arrive as values and are
/// routed by the state machine. What remains are contract violations and the
/// display surface going away.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    UnhandledKey(#[from] UnhandledKeyError),
    #[error("view `{view}` resolved without an action key")]
    MissingKey { view: String },
    #[error("invalid flow transition: {0}")]
    Transition(#[from] TransitionError),
    #[error("presentation failed: {0}")]
    Presentation(#[from] PresentationError),
}
