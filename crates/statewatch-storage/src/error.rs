use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}
