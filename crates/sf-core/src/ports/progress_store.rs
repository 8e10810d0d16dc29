//! Progress store port
//!
//! This port defines the contract for persisting the opaque progress value.
//! Implementations are provided by the infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::flow::ErrorSignal;
use crate::progress::{Progress, ProgressToken};

#[async_trait]
pub trait ProgressStorePort: Send + Sync {
    /// Load saved progress; access failures yield [`ProgressToken::Unreadable`].
    async fn load(&self) -> ProgressToken;

    /// Persist `progress`, replacing any previous value.
    async fn save(&self, progress: &Progress) -> Result<(), ErrorSignal>;

    /// Remove any saved progress.
    async fn delete(&self) -> Result<(), ErrorSignal>;
}
