mod gcs;
mod local;

pub use gcs::GcsStore;
pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Abstraction over object storage backends.
/// Each store is bound to a single bucket when constructed.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`. An empty `content_type` means unknown.
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStoreError>;
    async fn get(&self, key: &str) -> Result<Bytes, ObjectStoreError>;
    /// Every key in the bucket, with any backend pagination fully drained.
    async fn list(&self) -> Result<Vec<String>, ObjectStoreError>;
}
