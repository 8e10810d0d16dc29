use sf_core::view::View;
use sf_core::BranchTable;
use tracing::debug;

use super::FlowError;
use crate::views::ViewCatalog;

/// Shows one view and picks a handler by the action key it resolved with.
///
/// Construction checks that every key the view can emit has a handler, so a
/// catalog/dispatcher mismatch fails before the session starts. A key outside
/// the view's declared actions still fails at dispatch time.
#[derive(Debug, Clone)]
pub struct BranchDispatcher<T> {
    view: View,
    table: BranchTable<T>,
}

impl<T: Clone> BranchDispatcher<T> {
    pub fn new(view: View, table: BranchTable<T>, catalog: &ViewCatalog) -> Result<Self, FlowError> {
        let spec = catalog.spec(&view);
        table.ensure_covers(&spec.name, &spec.action_keys())?;
        Ok(Self { view, table })
    }

    pub async fn dispatch(&self, catalog: &ViewCatalog) -> Result<T, FlowError> {
        let result = catalog.show(self.view.clone()).await?;
        let view = self.view.name();
        let key = result
            .key()
            .ok_or_else(|| FlowError::MissingKey { view: view.clone() })?;
        let handler = self.table.resolve(&view, key)?;
        debug!(view = %view, key = %key, "branch dispatched");
        Ok(handler.clone())
    }
}
