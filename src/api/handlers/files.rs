use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use std::sync::Arc;

use crate::api::response::{ApiError, MessageResponse};
use crate::AppState;

pub const GREETING: &str = "Hello, GCP File Upload!";

/// Reachability check.
/// Route: GET /api/files/hello
pub async fn hello() -> &'static str {
    tracing::info!("Hello API called");
    GREETING
}

/// Route: POST /api/files/upload (multipart field `file`)
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut upload: Option<(String, Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

        upload = Some((file_name, content_type, data));
        break;
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| ApiError::bad_request("file field is required"))?;

    tracing::info!(file_name = %file_name, byte_size = data.len(), "File upload request received");

    match state
        .gateway
        .upload(&file_name, content_type.as_deref(), data)
        .await
    {
        Ok(key) => {
            let message = format!("Uploaded the file successfully: {key}");
            tracing::info!(key = %key, "{message}");
            Ok(MessageResponse::json(message))
        }
        Err(e) => {
            let message = format!("Could not upload the file: {file_name}! Error: {e}");
            tracing::error!(file_name = %file_name, error = %e, "Upload failed");
            Err(ApiError::UploadFailed(message))
        }
    }
}

/// Public URLs of every stored file.
/// Route: GET /api/files
pub async fn list_files(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    tracing::info!("Request received to list all files");

    match state.gateway.list_all().await {
        Ok(urls) => {
            tracing::info!(count = urls.len(), "Listed file URLs");
            Ok(Json(urls))
        }
        Err(e) => {
            tracing::error!(error = %e, "Listing failed");
            Err(ApiError::ListFailed(format!(
                "Could not list files. Error: {e}"
            )))
        }
    }
}

/// Download a file by its generated key.
/// Route: GET /api/files/:filename
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    tracing::info!(key = %filename, "Request received to download file");

    let file = match state.gateway.download(&filename).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            tracing::warn!(key = %filename, "File not found for download");
            return Err(ApiError::NotFound);
        }
        Err(e) => {
            tracing::error!(key = %filename, error = %e, "Download failed");
            return Err(ApiError::Internal);
        }
    };

    let byte_size = file.data.len() as u64;
    let mut response = (StatusCode::OK, file.data).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(file.content_type),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(byte_size));

    // Keys that cannot be a header value simply go without a suggested name.
    if let Ok(value) = format!("attachment; filename=\"{filename}\"").parse() {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    tracing::info!(key = %filename, content_type = file.content_type, "Prepared file for download");
    Ok(response)
}
