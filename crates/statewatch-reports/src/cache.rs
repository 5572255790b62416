use std::collections::HashSet;

use tokio::sync::OnceCell;

use crate::error::ReportError;
use crate::providers::ClusterInventory;

/// Per-run snapshot of the live cluster set.
///
/// Consults the inventory collaborator at most once, on first need, and
/// serves the cached set for the rest of the run. Each pipeline owns its own
/// instance — the snapshot is never shared across runs.
pub struct InventoryCache {
    inventory: Box<dyn ClusterInventory>,
    snapshot: OnceCell<HashSet<String>>,
}

impl InventoryCache {
    pub fn new(inventory: Box<dyn ClusterInventory>) -> Self {
        Self {
            inventory,
            snapshot: OnceCell::new(),
        }
    }

    /// The current cluster set, fetched on first call.
    ///
    /// A failed fetch leaves the cell uninitialized and propagates the
    /// error to the caller.
    pub async fn get(&self) -> Result<&HashSet<String>, ReportError> {
        self.snapshot
            .get_or_try_init(|| self.inventory.cluster_names())
            .await
    }
}
