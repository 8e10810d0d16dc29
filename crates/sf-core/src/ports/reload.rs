use async_trait::async_trait;

use crate::flow::ErrorSignal;

#[async_trait]
pub trait ReloadPort: Send + Sync {
    /// Request a fresh session. Fails with [`ErrorSignal::DeadEnd`] when even
    /// that is not possible.
    async fn reload(&self) -> Result<(), ErrorSignal>;
}
