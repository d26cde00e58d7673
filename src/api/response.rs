use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// ============================================================================
// Message envelope
// ============================================================================

/// `{"message": "..."}` body used by the upload endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn json(message: impl Into<String>) -> Json<MessageResponse> {
        Json(MessageResponse {
            message: message.into(),
        })
    }
}

// ============================================================================
// Unified error type for handlers
// ============================================================================

/// Each variant renders the failure shape of the endpoint that produces it.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a message body (unreadable multipart request).
    BadRequest(String),
    /// 417 with a message body (upload rejected by the store).
    UploadFailed(String),
    /// 500 with a one-element JSON array (listing failed).
    ListFailed(String),
    /// 404 with an empty body.
    NotFound,
    /// 500 with an empty body.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, MessageResponse::json(msg)).into_response()
            }
            ApiError::UploadFailed(msg) => {
                (StatusCode::EXPECTATION_FAILED, MessageResponse::json(msg)).into_response()
            }
            ApiError::ListFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(vec![msg])).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}
