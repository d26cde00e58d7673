use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use file_gateway::{
    api,
    config::{Config, StorageBackend},
    gateway::Gateway,
    object_store as obj,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match log_format.to_lowercase().as_str() {
        "gcp" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_stackdriver::layer())
                .init();
        }
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "file-gateway starting");

    let config = Config::load()?;

    // Initialize object store backend
    let object_store: Arc<dyn obj::ObjectStore> = match config.storage.backend {
        StorageBackend::Local => {
            let store = obj::LocalStore::new(&config.storage.local_storage_path)?;
            info!(
                "Using local storage backend at: {}",
                config.storage.local_storage_path
            );
            Arc::new(store)
        }
        StorageBackend::Gcs => {
            let bucket = config
                .storage
                .gcs_bucket
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("GCS_BUCKET is required when STORAGE_BACKEND=gcs"))?;
            let credentials_file = config.storage.gcs_credentials_file.as_deref();
            let store = match config.storage.gcs_endpoint.as_deref() {
                Some(endpoint) => {
                    info!("Using GCS endpoint: {}", endpoint);
                    obj::GcsStore::with_endpoint(bucket, credentials_file, endpoint).await?
                }
                None => obj::GcsStore::new(bucket, credentials_file).await?,
            };
            info!("Using GCS storage backend, bucket: {}", bucket);
            Arc::new(store)
        }
    };

    info!(prefix = %config.public_url_prefix, "Public URL prefix");

    let state = Arc::new(AppState {
        gateway: Gateway::new(object_store, config.public_url_prefix.clone()),
        config: config.clone(),
    });

    // Build and start the HTTP server
    let app = api::create_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on: {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
