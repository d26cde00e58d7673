use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{ObjectStore, ObjectStoreError};

/// Writes land in a file with this prefix and are renamed into place once complete.
/// Such names are never valid keys and never listed.
const TEMP_PREFIX: &str = ".tmp-";

/// Local filesystem object store for development and testing.
/// Content types are accepted but not persisted.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Keys map to files directly under the base directory, never below or above it.
    fn object_path(&self, key: &str) -> Result<PathBuf, ObjectStoreError> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.starts_with(TEMP_PREFIX)
            || key.contains(['/', '\\', '\0'])
        {
            return Err(ObjectStoreError::Backend(format!(
                "key '{key}' is not a valid local object name"
            )));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        let path = self.object_path(key)?;
        let temp_path = self
            .base_path
            .join(format!("{TEMP_PREFIX}{}", uuid::Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&temp_path, &data).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, ObjectStoreError> {
        // Nothing can ever have been stored under a key `put` rejects.
        let Ok(path) = self.object_path(key) else {
            return Err(ObjectStoreError::NotFound(key.to_string()));
        };
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ObjectStoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await?;
        let mut keys = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) if !name.starts_with(TEMP_PREFIX) => keys.push(name.to_string()),
                _ => {}
            }
        }

        keys.sort();
        Ok(keys)
    }
}
