use std::collections::HashSet;

use statewatch_core::console::console_object_url;
use statewatch_core::key_path::{is_state_file, KeyPath};
use statewatch_core::policy::IgnorePolicy;
use statewatch_core::report::OrphanedStateFile;

use crate::cache::InventoryCache;
use crate::error::ReportError;
use crate::providers::{ClusterInventory, ObjectLister};

/// Configuration for one report run. Passed in explicitly — the pipeline
/// reads nothing from ambient state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Bucket holding the Terraform state files.
    pub bucket: String,
    /// Region whose cluster inventory the state files are checked against;
    /// also embedded in the console links.
    pub region: String,
    pub policy: IgnorePolicy,
}

/// The orphaned-state-file report: state files in a bucket whose owning
/// cluster no longer exists.
///
/// One value is one run. The cluster snapshot is cached inside the value,
/// so concurrent runs (one per region, say) each construct their own.
pub struct OrphanedStateFiles {
    lister: Box<dyn ObjectLister>,
    inventory: InventoryCache,
    config: ReportConfig,
}

impl OrphanedStateFiles {
    pub fn new(
        lister: Box<dyn ObjectLister>,
        inventory: Box<dyn ClusterInventory>,
        config: ReportConfig,
    ) -> Self {
        Self {
            lister,
            inventory: InventoryCache::new(inventory),
            config,
        }
    }

    /// Run the pipeline once: list the bucket, keep the state files, drop
    /// the ones that belong to no single cluster, drop the ones whose
    /// cluster still exists, and link each survivor to the S3 console.
    ///
    /// Listing order is preserved end to end. An empty result is a normal,
    /// successful run. Collaborator failures propagate unchanged — no
    /// retries, no partial report.
    pub async fn list(&self) -> Result<Vec<OrphanedStateFile>, ReportError> {
        let keys = self.lister.list_keys(&self.config.bucket).await?;
        let listed = keys.len();

        let candidates: Vec<String> = keys
            .into_iter()
            .filter(|key| is_state_file(key))
            .filter(|key| self.config.policy.is_cluster_owned(&KeyPath::parse(key)))
            .collect();

        tracing::debug!(
            bucket = %self.config.bucket,
            keys = listed,
            candidates = candidates.len(),
            "classified state files"
        );

        // No candidates left — the inventory never needs to be fetched.
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let current = self.inventory.get().await?;
        let orphaned: Vec<OrphanedStateFile> = candidates
            .into_iter()
            .filter(|key| !belongs_to_current_cluster(key, current))
            .map(|key| OrphanedStateFile {
                url: console_object_url(&self.config.bucket, &self.config.region, &key),
                key,
            })
            .collect();

        tracing::info!(
            bucket = %self.config.bucket,
            region = %self.config.region,
            orphaned = orphaned.len(),
            "orphaned state file report complete"
        );

        Ok(orphaned)
    }
}

/// True when the key's owning directory names a cluster that still exists.
fn belongs_to_current_cluster(key: &str, current: &HashSet<String>) -> bool {
    KeyPath::parse(key)
        .parent_dir()
        .is_some_and(|cluster| current.contains(cluster))
}
