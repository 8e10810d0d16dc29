use serde::{Deserialize, Serialize};

use super::ActionKey;

/// Value a view produces when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewResult {
    /// No decision data (feedback and message screens).
    Void,
    /// The user took the action identified by `key`.
    Keyed { key: ActionKey },
}

impl ViewResult {
    pub fn keyed(key: ActionKey) -> Self {
        ViewResult::Keyed { key }
    }

    pub fn key(&self) -> Option<ActionKey> {
        match self {
            ViewResult::Void => None,
            ViewResult::Keyed { key } => Some(*key),
        }
    }
}
