use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which of a view's actions the user took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKey {
    /// Generic "go on" key used when an action declares none.
    Forward,
    DeleteProgress,
    ContinueSomething,
}

impl ActionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKey::Forward => "forward",
            ActionKey::DeleteProgress => "delete-progress",
            ActionKey::ContinueSomething => "continue-something",
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual emphasis of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStyle {
    #[default]
    Primary,
    Danger,
    Neutral,
    Different,
    Absurd,
}

/// One user action offered by an interactive view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub label: String,
    pub style: ActionStyle,
    pub key: ActionKey,
}

impl ActionDescriptor {
    /// Action with the default style and the [`ActionKey::Forward`] key.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ActionStyle::default(),
            key: ActionKey::Forward,
        }
    }

    pub fn styled(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn keyed(mut self, key: ActionKey) -> Self {
        self.key = key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_key_defaults_to_forward() {
        let action = ActionDescriptor::new("Next");
        assert_eq!(action.key, ActionKey::Forward);
        assert_eq!(action.style, ActionStyle::Primary);
    }

    #[test]
    fn keys_serialize_in_kebab_case() {
        let encoded = serde_json::to_string(&ActionKey::DeleteProgress).unwrap();
        assert_eq!(encoded, r#""delete-progress""#);
        assert_eq!(ActionKey::ContinueSomething.to_string(), "continue-something");
    }
}
