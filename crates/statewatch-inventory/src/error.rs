use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("EKS ListClusters error: {0}")]
    ListClusters(String),
}
