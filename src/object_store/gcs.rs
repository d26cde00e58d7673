use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::{ObjectStore, ObjectStoreError};

/// Public GCS endpoint, used unless another one is configured.
pub const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";
const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Tokens this close to expiry are refreshed before use.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Google Cloud Storage object store backend (JSON API).
pub struct GcsStore {
    bucket: String,
    /// Base URL of the JSON API, without a trailing slash.
    endpoint: String,
    client: Client,
    access_token: tokio::sync::RwLock<Option<AccessToken>>,
    credentials_file: Option<String>,
}

#[derive(Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Utc::now() + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) < self.expires_at
    }
}

#[derive(Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListObjectsResponse {
    #[serde(default)]
    items: Vec<ObjectResource>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct ObjectResource {
    name: String,
}

impl GcsStore {
    pub async fn new(bucket: &str, credentials_file: Option<&str>) -> Result<Self, anyhow::Error> {
        Self::with_endpoint(bucket, credentials_file, DEFAULT_ENDPOINT).await
    }

    /// Like [`GcsStore::new`], but against another JSON API endpoint
    /// (an emulator or a regional host).
    pub async fn with_endpoint(
        bucket: &str,
        credentials_file: Option<&str>,
        endpoint: &str,
    ) -> Result<Self, anyhow::Error> {
        let client = Client::builder().build()?;

        let store = Self {
            bucket: bucket.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            access_token: tokio::sync::RwLock::new(None),
            credentials_file: credentials_file.map(|s| s.to_string()),
        };

        // Credentials are checked once at startup.
        store.refresh_token().await?;
        Ok(store)
    }

    /// Current bearer token, refreshed first if it is about to expire.
    async fn bearer_token(&self) -> Result<String, ObjectStoreError> {
        if let Some(token) = self.access_token.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.value.clone());
            }
        }

        self.refresh_token()
            .await
            .map_err(|e| ObjectStoreError::Backend(format!("GCS token refresh failed: {e}")))
    }

    async fn refresh_token(&self) -> Result<String, anyhow::Error> {
        let resp = if let Some(ref creds_path) = self.credentials_file {
            self.token_from_service_account(creds_path).await?
        } else {
            self.token_from_metadata_server().await?
        };

        let token = AccessToken {
            value: resp.access_token,
            expires_at: Utc::now() + Duration::seconds(resp.expires_in),
        };
        tracing::debug!(expires_at = %token.expires_at, "Refreshed GCS access token");

        let mut lock = self.access_token.write().await;
        *lock = Some(token.clone());
        Ok(token.value)
    }

    async fn token_from_service_account(&self, path: &str) -> Result<TokenResponse, anyhow::Error> {
        let key_json = tokio::fs::read_to_string(path).await?;
        let key: ServiceAccountKey = serde_json::from_str(&key_json)?;

        let now = Utc::now().timestamp();
        let claims = serde_json::json!({
            "iss": key.client_email,
            "scope": "https://www.googleapis.com/auth/devstorage.read_write",
            "aud": key.token_uri,
            "iat": now,
            "exp": now + 3600,
        });

        // header.claims.signature
        let header = base64_url_encode(&serde_json::to_vec(&serde_json::json!({
            "alg": "RS256",
            "typ": "JWT"
        }))?);
        let payload = base64_url_encode(&serde_json::to_vec(&claims)?);
        let unsigned = format!("{header}.{payload}");

        let signature = sign_rs256(unsigned.as_bytes(), &key.private_key)?;
        let jwt = format!("{unsigned}.{}", base64_url_encode(&signature));

        let resp: TokenResponse = self
            .client
            .post(&key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", &jwt),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp)
    }

    async fn token_from_metadata_server(&self) -> Result<TokenResponse, anyhow::Error> {
        let resp: TokenResponse = self
            .client
            .get(METADATA_TOKEN_URL)
            .header("Metadata-Flavor", "Google")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp)
    }

    fn upload_url(&self, key: &str) -> String {
        format!(
            "{}/upload/storage/v1/b/{}/o?uploadType=media&name={}",
            self.endpoint,
            self.bucket,
            urlencoding::encode(key)
        )
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.endpoint,
            self.bucket,
            urlencoding::encode(key)
        )
    }

    fn list_url(&self, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}/storage/v1/b/{}/o?fields={}",
            self.endpoint,
            self.bucket,
            urlencoding::encode("items(name),nextPageToken")
        );
        if let Some(token) = page_token {
            url.push_str("&pageToken=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }
}

#[async_trait]
impl ObjectStore for GcsStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStoreError> {
        let token = self.bearer_token().await?;
        let content_type = if content_type.is_empty() {
            "application/octet-stream"
        } else {
            content_type
        };

        let resp = self
            .client
            .post(self.upload_url(key))
            .bearer_auth(&token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ObjectStoreError::Backend(format!(
                "GCS upload failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, ObjectStoreError> {
        let token = self.bearer_token().await?;

        let resp = self
            .client
            .get(self.object_url(key))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ObjectStoreError::NotFound(key.to_string()));
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ObjectStoreError::Backend(format!(
                "GCS download failed ({status}): {body}"
            )));
        }

        let data = resp
            .bytes()
            .await
            .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

        Ok(data)
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        let mut keys = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let token = self.bearer_token().await?;

            let resp = self
                .client
                .get(self.list_url(page_token.as_deref()))
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(ObjectStoreError::Backend(format!(
                    "GCS list failed ({status}): {body}"
                )));
            }

            let page: ListObjectsResponse = resp
                .json()
                .await
                .map_err(|e| ObjectStoreError::Backend(e.to_string()))?;
            keys.extend(page.items.into_iter().map(|item| item.name));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(keys)
    }
}

fn base64_url_encode(data: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(data)
}

fn sign_rs256(data: &[u8], private_key_pem: &str) -> Result<Vec<u8>, anyhow::Error> {
    // PEM body to DER
    let der_b64: String = private_key_pem
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .map(str::trim)
        .collect();
    let der = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &der_b64)?;

    let key_pair = ring::signature::RsaKeyPair::from_pkcs8(&der)
        .map_err(|e| anyhow::anyhow!("Failed to parse RSA key: {e}"))?;

    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(
            &ring::signature::RSA_PKCS1_SHA256,
            &ring::rand::SystemRandom::new(),
            data,
            &mut signature,
        )
        .map_err(|e| anyhow::anyhow!("Failed to sign: {e}"))?;

    Ok(signature)
}
