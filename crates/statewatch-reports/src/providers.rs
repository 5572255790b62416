use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use crate::error::ReportError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Storage listing collaborator.
///
/// Implementations return the complete key list for a bucket — pagination is
/// resolved behind this trait, never exposed to the pipeline. An empty
/// bucket is `Ok` with an empty list; failures (auth, missing bucket,
/// throttling) are `Err`.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ObjectLister: Send + Sync {
    fn list_keys(&self, bucket: &str) -> BoxFuture<'_, Result<Vec<String>, ReportError>>;
}

/// Cluster inventory collaborator: the names of every cluster currently
/// running in the region the implementation was built for.
///
/// Zero clusters is `Ok` with an empty set, distinguishable from a failed
/// fetch.
pub trait ClusterInventory: Send + Sync {
    fn cluster_names(&self) -> BoxFuture<'_, Result<HashSet<String>, ReportError>>;
}
