//! Shared test helpers for in-crate HTTP tests.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::{Config, StorageConfig};
use crate::gateway::Gateway;
use crate::object_store::{LocalStore, ObjectStore, ObjectStoreError};
use crate::AppState;

pub const TEST_URL_PREFIX: &str = "https://storage.example.test/bucket";

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_string(),
        storage: StorageConfig::default(),
        public_url_prefix: TEST_URL_PREFIX.to_string(),
        max_upload_size: 10 * 1024 * 1024, // 10MB for tests
    }
}

/// Create a test AppState backed by a local object store in a temporary directory.
pub fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    let files_dir = temp_dir.path().join("files");
    let object_store = LocalStore::new(&files_dir).expect("Failed to create test object store");

    Arc::new(AppState {
        config: test_config(),
        gateway: Gateway::new(Arc::new(object_store), TEST_URL_PREFIX),
    })
}

/// Create a test AppState whose object store rejects every call.
pub fn failing_state() -> Arc<AppState> {
    Arc::new(AppState {
        config: test_config(),
        gateway: Gateway::new(Arc::new(FailingStore), TEST_URL_PREFIX),
    })
}

pub struct FailingStore;

#[async_trait]
impl ObjectStore for FailingStore {
    async fn put(&self, _key: &str, _data: Bytes, _content_type: &str) -> Result<(), ObjectStoreError> {
        Err(ObjectStoreError::Backend("store unavailable".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Bytes, ObjectStoreError> {
        Err(ObjectStoreError::Backend("store unavailable".to_string()))
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        Err(ObjectStoreError::Backend("store unavailable".to_string()))
    }
}
