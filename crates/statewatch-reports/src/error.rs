use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("storage error: {0}")]
    Storage(#[from] statewatch_storage::error::StorageError),

    #[error("inventory error: {0}")]
    Inventory(#[from] statewatch_inventory::error::InventoryError),
}
