//! Report models shared between the pipeline and the presentation layer.

use serde::{Deserialize, Serialize};

/// One state file whose owning cluster no longer exists, with a console
/// link for human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanedStateFile {
    pub key: String,
    pub url: String,
}

/// The envelope the report is published in: the entry list stamped with the
/// time it was generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrphanedStateFileReport {
    pub updated_at: jiff::Timestamp,
    pub orphaned_statefiles: Vec<OrphanedStateFile>,
}
