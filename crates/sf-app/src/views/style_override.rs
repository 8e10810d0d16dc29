use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sf_core::ports::StyleSurfacePort;
use sf_core::view::{RestoreToken, ScreenHooks, StyleMap};
use tracing::debug;

/// Temporarily overrides surface style properties while a screen is shown.
pub struct StyleOverride {
    surface: Arc<dyn StyleSurfacePort>,
    overrides: StyleMap,
    restore_on_exit: bool,
    exit_delay: Duration,
}

impl StyleOverride {
    /// Override restored when the screen exits, followed by `exit_delay`.
    pub fn scoped(
        surface: Arc<dyn StyleSurfacePort>,
        overrides: StyleMap,
        exit_delay: Duration,
    ) -> Self {
        Self {
            surface,
            overrides,
            restore_on_exit: true,
            exit_delay,
        }
    }

    /// Override kept after the screen, for terminal screens.
    pub fn persistent(surface: Arc<dyn StyleSurfacePort>, overrides: StyleMap) -> Self {
        Self {
            surface,
            overrides,
            restore_on_exit: false,
            exit_delay: Duration::ZERO,
        }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

#[async_trait]
impl ScreenHooks for StyleOverride {
    fn on_enter(&self) -> RestoreToken {
        let previous = self.surface.apply(&self.overrides);
        debug!(properties = self.overrides.len(), "style override entered");
        RestoreToken::new(previous)
    }

    async fn on_exit(&self, token: RestoreToken) {
        if !self.restore_on_exit {
            return;
        }
        self.surface.restore(token.into_inner());
        debug!("style override restored");
        if !self.exit_delay.is_zero() {
            tokio::time::sleep(self.exit_delay).await;
        }
    }
}
