//! Naming conventions separating per-cluster state files from shared ones.

use std::collections::HashSet;

use crate::key_path::KeyPath;

/// Top-level directories holding state that belongs to no single cluster:
/// environment pipelines, concourse state, global resources, account
/// baselines. `terraform.tfstate` covers a bare state file at bucket root,
/// which shows up as its own first segment.
pub const DEFAULT_IGNORE_PREFIXES: &[&str] = &[
    "cloud-platform-dsd",
    "cloud-platform-environments",
    "cloud-platform-concourse",
    "concourse-pipelines",
    "global-resources",
    "account",
    "terraform.tfstate",
];

/// Directory names that hold account-level rather than cluster state.
pub const DEFAULT_IGNORE_SUFFIXES: &[&str] = &["account"];

/// Path-segment ignore lists identifying state files that do not belong to
/// a specific cluster and must never be reported as orphaned.
///
/// Membership is exact-string and case-sensitive against a single segment,
/// never a substring match across the whole key.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    prefixes: HashSet<String>,
    suffixes: HashSet<String>,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORE_PREFIXES.iter().map(|p| p.to_string()),
            DEFAULT_IGNORE_SUFFIXES.iter().map(|s| s.to_string()),
        )
    }
}

impl IgnorePolicy {
    /// Build a policy from explicit ignore lists. `prefixes` are matched
    /// against the first segment of a key, `suffixes` against the segment
    /// immediately before the final one.
    pub fn new(
        prefixes: impl IntoIterator<Item = String>,
        suffixes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
            suffixes: suffixes.into_iter().collect(),
        }
    }

    /// Whether this key looks like a state file owned by one cluster.
    ///
    /// A key too short to carry an owning directory cannot have its
    /// ownership determined and is treated as not cluster-owned.
    pub fn is_cluster_owned(&self, path: &KeyPath) -> bool {
        let (Some(prefix), Some(parent)) = (path.top_level(), path.parent_dir()) else {
            return false;
        };
        !self.prefixes.contains(prefix) && !self.suffixes.contains(parent)
    }
}
