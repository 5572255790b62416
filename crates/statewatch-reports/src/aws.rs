//! AWS-backed collaborator implementations.

use std::collections::HashSet;

use aws_sdk_eks::Client as EksClient;
use aws_sdk_s3::Client as S3Client;

use crate::error::ReportError;
use crate::providers::{BoxFuture, ClusterInventory, ObjectLister};

/// Lists object keys straight out of an S3 bucket.
pub struct S3ObjectLister {
    client: S3Client,
}

impl S3ObjectLister {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

impl ObjectLister for S3ObjectLister {
    fn list_keys(&self, bucket: &str) -> BoxFuture<'_, Result<Vec<String>, ReportError>> {
        let bucket = bucket.to_string();
        Box::pin(async move {
            let keys =
                statewatch_storage::objects::list_objects(&self.client, &bucket, "").await?;
            Ok(keys)
        })
    }
}

/// Reads the live cluster set out of EKS for the region the client was
/// built for.
pub struct EksClusterInventory {
    client: EksClient,
}

impl EksClusterInventory {
    pub fn new(client: EksClient) -> Self {
        Self { client }
    }
}

impl ClusterInventory for EksClusterInventory {
    fn cluster_names(&self) -> BoxFuture<'_, Result<HashSet<String>, ReportError>> {
        Box::pin(async {
            let names = statewatch_inventory::clusters::list_cluster_names(&self.client).await?;
            Ok(names)
        })
    }
}
