use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub storage: StorageConfig,
    /// Prefix joined with `/` and an object key to form its public URL.
    /// Never ends with a slash.
    pub public_url_prefix: String,
    /// Maximum upload size in bytes
    pub max_upload_size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Gcs,
    Local,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for local storage backend
    pub local_storage_path: String,
    /// GCS bucket name (required when backend is gcs)
    pub gcs_bucket: Option<String>,
    /// Path to GCS service account JSON (optional, defaults to the metadata server)
    pub gcs_credentials_file: Option<String>,
    /// JSON API base URL override (emulators, private endpoints)
    pub gcs_endpoint: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            local_storage_path: "./files".to_string(),
            gcs_bucket: None,
            gcs_credentials_file: None,
            gcs_endpoint: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(50 * 1024 * 1024); // 50MB

        let storage_backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "gcs" => StorageBackend::Gcs,
            _ => StorageBackend::Local,
        };

        let local_storage_path =
            std::env::var("LOCAL_STORAGE_PATH").unwrap_or_else(|_| "./files".to_string());

        let gcs_bucket = std::env::var("GCS_BUCKET").ok();
        let gcs_credentials_file = std::env::var("GCS_CREDENTIALS_FILE").ok();
        let gcs_endpoint = std::env::var("GCS_ENDPOINT").ok();

        let storage = StorageConfig {
            backend: storage_backend,
            local_storage_path,
            gcs_bucket,
            gcs_credentials_file,
            gcs_endpoint,
        };

        let public_url_prefix = match std::env::var("PUBLIC_URL_PREFIX") {
            Ok(prefix) => normalize_prefix(&prefix),
            Err(_) => default_public_url_prefix(&storage, &bind_address),
        };

        let config = Config {
            bind_address,
            storage,
            public_url_prefix,
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Gcs && self.storage.gcs_bucket.is_none() {
            return Err(ConfigError::ValidationError(
                "GCS_BUCKET is required when STORAGE_BACKEND=gcs".to_string(),
            ));
        }

        if self.public_url_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "PUBLIC_URL_PREFIX cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Public objects in GCS are served from `storage.googleapis.com/<bucket>`; the
/// local backend has no public host, so point at this server's own download route.
fn default_public_url_prefix(storage: &StorageConfig, bind_address: &str) -> String {
    match (&storage.backend, &storage.gcs_bucket) {
        (StorageBackend::Gcs, Some(bucket)) => {
            format!("https://storage.googleapis.com/{bucket}")
        }
        _ => format!("http://{bind_address}/api/files"),
    }
}

fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().trim_end_matches('/').to_string()
}
