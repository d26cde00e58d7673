use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use file_gateway::gateway::{Gateway, GatewayError};
use file_gateway::object_store::{LocalStore, ObjectStore, ObjectStoreError};

const PREFIX: &str = "https://storage.googleapis.com/test-bucket";

fn test_gateway() -> (tempfile::TempDir, Gateway) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join("files")).unwrap();
    (dir, Gateway::new(Arc::new(store), PREFIX))
}

/// Counts calls and fails every one of them with a backend error.
#[derive(Default)]
struct BrokenStore {
    calls: AtomicUsize,
}

#[async_trait]
impl ObjectStore for BrokenStore {
    async fn put(&self, _key: &str, _data: Bytes, _content_type: &str) -> Result<(), ObjectStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ObjectStoreError::Backend("quota exceeded".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Bytes, ObjectStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ObjectStoreError::Backend("permission denied".to_string()))
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ObjectStoreError::Backend("connection reset".to_string()))
    }
}

#[tokio::test]
async fn test_upload_keys_are_unique() {
    let (_dir, gateway) = test_gateway();

    let mut keys = HashSet::new();
    for _ in 0..20 {
        let key = gateway
            .upload("same.txt", Some("text/plain"), Bytes::from("x"))
            .await
            .unwrap();
        assert!(key.ends_with("_same.txt"));
        keys.insert(key);
    }
    assert_eq!(keys.len(), 20);
}

#[tokio::test]
async fn test_round_trip_ignores_declared_type() {
    let (_dir, gateway) = test_gateway();
    let payload = Bytes::from_static(&[0, 159, 146, 150, 255, 0, 1]);

    for declared in [Some("image/png"), Some("text/plain"), None] {
        let key = gateway
            .upload("blob.bin", declared, payload.clone())
            .await
            .unwrap();
        let file = gateway.download(&key).await.unwrap().expect("uploaded file");
        assert_eq!(file.data, payload);
        assert_eq!(file.content_type, "application/octet-stream");
    }
}

#[tokio::test]
async fn test_download_content_type_comes_from_extension() {
    let (_dir, gateway) = test_gateway();

    let key = gateway
        .upload("report.pdf", Some("text/plain"), Bytes::from("%PDF"))
        .await
        .unwrap();
    let file = gateway.download(&key).await.unwrap().unwrap();
    assert_eq!(file.content_type, "application/pdf");

    let key = gateway
        .upload("NOTES.TXT", None, Bytes::from("notes"))
        .await
        .unwrap();
    let file = gateway.download(&key).await.unwrap().unwrap();
    assert_eq!(file.content_type, "text/plain");
}

#[tokio::test]
async fn test_empty_upload() {
    let (_dir, gateway) = test_gateway();

    let key = gateway.upload("empty.txt", None, Bytes::new()).await.unwrap();
    let file = gateway.download(&key).await.unwrap().unwrap();
    assert!(file.data.is_empty());
}

#[tokio::test]
async fn test_download_never_issued_key_is_none() {
    let (_dir, gateway) = test_gateway();

    let result = gateway.download("not-a-real-key.png").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_empty_bucket() {
    let (_dir, gateway) = test_gateway();
    assert!(gateway.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_one_url_per_upload() {
    let (_dir, gateway) = test_gateway();

    let mut issued = HashSet::new();
    for name in ["a.png", "b.jpg", "c.pdf", "d"] {
        let key = gateway.upload(name, None, Bytes::from(name)).await.unwrap();
        issued.insert(format!("{PREFIX}/{key}"));
    }

    let urls = gateway.list_all().await.unwrap();
    assert_eq!(urls.len(), 4);
    let listed: HashSet<String> = urls.into_iter().collect();
    assert_eq!(listed, issued);
}

#[tokio::test]
async fn test_store_failures_map_to_operation_errors() {
    let store = Arc::new(BrokenStore::default());
    let gateway = Gateway::new(store.clone(), PREFIX);

    let err = gateway
        .upload("a.txt", None, Bytes::from("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::StoreWrite(ref cause) if cause.contains("quota exceeded")));

    let err = gateway.download("a.txt").await.unwrap_err();
    assert!(matches!(err, GatewayError::StoreRead(ref cause) if cause.contains("permission denied")));

    let err = gateway.list_all().await.unwrap_err();
    assert!(matches!(err, GatewayError::StoreList(ref cause) if cause.contains("connection reset")));

    // One store call per operation, no retries.
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_upload_with_path_separator_fails_on_local_store() {
    let (dir, gateway) = test_gateway();

    let err = gateway
        .upload("../outside.txt", None, Bytes::from("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::StoreWrite(_)));
    assert!(!dir.path().join("outside.txt").exists());
    assert!(gateway.list_all().await.unwrap().is_empty());
}
