use serde::{Deserialize, Serialize};

/// Failure reported by a port as a value.
///
/// Produced by the persistence and reload collaborators and consumed only by
/// the flow engine, which routes it to the abort or dead-end flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ErrorSignal {
    /// Progress storage could not be accessed. Recoverable by reloading.
    #[error("progress storage is unreadable")]
    StorageUnreadable,
    /// The recovery action itself failed. No further action is offered.
    #[error("session reached a dead end")]
    DeadEnd,
}

impl ErrorSignal {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorSignal::StorageUnreadable => {
                "Local storage cannot be accessed. Check that local / third-party storage \
                 is enabled and try again. If the error persists, feel free to report it."
            }
            ErrorSignal::DeadEnd => "Today is not your lucky day. Reload the page and try again.",
        }
    }

    /// Whether the signal leaves nothing to retry.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ErrorSignal::DeadEnd)
    }
}
