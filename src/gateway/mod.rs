//! Upload, list, and download orchestration over an [`ObjectStore`].
//!
//! The gateway holds no mutable state: a shared store handle and the public URL
//! prefix are all it needs, so it is cheap to clone into every request.

pub mod content_type;
pub mod naming;

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

use crate::object_store::{ObjectStore, ObjectStoreError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    StoreWrite(String),
    #[error("{0}")]
    StoreRead(String),
    #[error("{0}")]
    StoreList(String),
}

/// A downloaded object and the content type to serve it with.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub content_type: &'static str,
    pub data: Bytes,
}

#[derive(Clone)]
pub struct Gateway {
    public_url_prefix: String,
    store: Arc<dyn ObjectStore>,
}

impl Gateway {
    pub fn new(store: Arc<dyn ObjectStore>, public_url_prefix: impl Into<String>) -> Self {
        Self {
            public_url_prefix: public_url_prefix.into(),
            store,
        }
    }

    /// Store `data` under a freshly generated key and return that key.
    ///
    /// The key is never reused, even when the write fails.
    pub async fn upload(
        &self,
        original_filename: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> Result<String, GatewayError> {
        let key = naming::generate_key(original_filename);
        let byte_size = data.len();

        self.store
            .put(&key, data, content_type.unwrap_or_default())
            .await
            .map_err(|e| GatewayError::StoreWrite(e.to_string()))?;

        tracing::debug!(key = %key, byte_size, "Stored object");
        Ok(key)
    }

    /// Public URLs for every object in the bucket, in store order.
    pub async fn list_all(&self) -> Result<Vec<String>, GatewayError> {
        let keys = self
            .store
            .list()
            .await
            .map_err(|e| GatewayError::StoreList(e.to_string()))?;

        Ok(keys.iter().map(|key| self.public_url(key)).collect())
    }

    /// Fetch an object by key. A missing object is `Ok(None)`, not an error.
    pub async fn download(&self, key: &str) -> Result<Option<DownloadedFile>, GatewayError> {
        match self.store.get(key).await {
            Ok(data) => Ok(Some(DownloadedFile {
                content_type: content_type::resolve(key),
                data,
            })),
            Err(ObjectStoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(GatewayError::StoreRead(e.to_string())),
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_url_prefix)
    }
}
