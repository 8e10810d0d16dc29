use std::collections::BTreeMap;

use crate::view::ActionKey;

/// A view emitted an action key that no handler is registered for.
///
/// This is a catalog/dispatcher mismatch, never a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("view `{view}` emitted action key `{key}` with no registered handler")]
pub struct UnhandledKeyError {
    pub view: String,
    pub key: ActionKey,
}

/// Handlers keyed exactly by [`ActionKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct BranchTable<T> {
    handlers: BTreeMap<ActionKey, T>,
}

impl<T> Default for BranchTable<T> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<T> BranchTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `key`, replacing any previous one.
    pub fn on(mut self, key: ActionKey, handler: T) -> Self {
        self.handlers.insert(key, handler);
        self
    }

    pub fn resolve(&self, view: &str, key: ActionKey) -> Result<&T, UnhandledKeyError> {
        self.handlers.get(&key).ok_or_else(|| UnhandledKeyError {
            view: view.to_string(),
            key,
        })
    }

    /// Check that every key `view` can emit has a handler.
    pub fn ensure_covers(&self, view: &str, keys: &[ActionKey]) -> Result<(), UnhandledKeyError> {
        match keys.iter().find(|key| !self.handlers.contains_key(key)) {
            Some(key) => Err(UnhandledKeyError {
                view: view.to_string(),
                key: *key,
            }),
            None => Ok(()),
        }
    }
}
