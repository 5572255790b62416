//! statewatch-reports
//!
//! The orphan-detection pipeline: which Terraform state files in a bucket
//! belong to clusters that no longer exist.
//!
//! The pipeline reaches its two collaborators through the [`providers`]
//! traits; [`aws`] carries the S3- and EKS-backed implementations used in
//! production.

pub mod aws;
pub mod cache;
pub mod error;
pub mod orphaned;
pub mod providers;

pub use crate::cache::InventoryCache;
pub use crate::error::ReportError;
pub use crate::orphaned::{OrphanedStateFiles, ReportConfig};
pub use crate::providers::{ClusterInventory, ObjectLister};
