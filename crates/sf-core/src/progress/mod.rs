//! User progress domain models
//!
//! Progress is an opaque blob owned by the persistence layer. The flow engine
//! only inspects which shape a load produced, never the value itself.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Opaque persisted value representing "the user has progressed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(serde_json::Value);

impl Progress {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Value written once the introductory sequence is done.
    pub fn initial() -> Self {
        Self(json!({ "onboarded": true }))
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Outcome of loading progress.
///
/// `Unreadable` is distinct from `Absent`: the store exists but could not be
/// accessed, which routes the session to the abort flow instead of onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressToken {
    /// Nothing was ever saved.
    Absent,
    /// A previously saved value.
    Present(Progress),
    /// The backing store could not be accessed.
    Unreadable,
}

impl ProgressToken {
    pub fn is_present(&self) -> bool {
        matches!(self, ProgressToken::Present(_))
    }
}

impl From<Option<Progress>> for ProgressToken {
    fn from(value: Option<Progress>) -> Self {
        match value {
            Some(progress) => ProgressToken::Present(progress),
            None => ProgressToken::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_serializes_transparently() {
        let progress = Progress::new(json!({ "step": 3 }));
        let encoded = serde_json::to_string(&progress).unwrap();
        assert_eq!(encoded, r#"{"step":3}"#);
    }

    #[test]
    fn option_maps_to_absent_or_present() {
        assert_eq!(ProgressToken::from(None), ProgressToken::Absent);
        let token = ProgressToken::from(Some(Progress::initial()));
        assert!(token.is_present());
    }
}
