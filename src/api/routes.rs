use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    let files = Router::new()
        .route("/", get(handlers::list_files))
        .route("/hello", get(handlers::hello))
        .route(
            "/upload",
            post(handlers::upload_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/:filename", get(handlers::download_file));

    Router::new()
        .nest("/api/files", files)
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
