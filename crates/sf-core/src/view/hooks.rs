//! Scoped visual side effects attached to a screen.
//!
//! `on_enter` runs strictly before the screen is displayed and hands back a
//! [`RestoreToken`]; `on_exit` receives that token strictly after the user's
//! action and before the view result is returned. The token is move-only, so
//! it reaches `on_exit` at most once.

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Style properties of the shared display surface, keyed by property name.
pub type StyleMap = BTreeMap<String, String>;

/// Values captured on enter that undo the entered side effect.
#[derive(Debug, PartialEq, Eq)]
pub struct RestoreToken(StyleMap);

impl RestoreToken {
    pub fn new(previous: StyleMap) -> Self {
        Self(previous)
    }

    pub fn previous(&self) -> &StyleMap {
        &self.0
    }

    pub fn into_inner(self) -> StyleMap {
        self.0
    }
}

#[async_trait]
pub trait ScreenHooks: Send + Sync {
    fn on_enter(&self) -> RestoreToken;

    async fn on_exit(&self, token: RestoreToken);
}
