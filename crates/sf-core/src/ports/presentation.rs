use async_trait::async_trait;

use crate::view::{ScreenSpec, ViewResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresentationError {
    /// The display surface went away (e.g. input closed); ends the session.
    #[error("presentation surface closed")]
    SurfaceClosed,
    #[error("presentation failed: {0}")]
    Render(String),
}

/// Renders one screen on the single shared display surface.
///
/// Implementations must produce exactly one result per call: after the user
/// performs one action for interactive screens, after the fixed delay for
/// feedback screens. Hooks are driven through [`ScreenSpec::enter`] so that
/// `on_enter` runs before display and `on_exit` runs before the result is
/// returned.
#[async_trait]
pub trait PresentationPort: Send + Sync {
    async fn show(&self, screen: ScreenSpec) -> Result<ViewResult, PresentationError>;
}
