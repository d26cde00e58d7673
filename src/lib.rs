//! file-gateway - An HTTP gateway in front of an object-storage bucket
//!
//! This crate provides upload, listing, and download of files with:
//! - Swappable object storage backends (local filesystem, GCS)
//! - Collision-free object keys derived from the uploaded filename
//! - Public URL reconstruction for every stored object
//! - REST API with multipart upload support

pub mod api;
pub mod config;
pub mod gateway;
pub mod object_store;
#[cfg(test)]
pub mod testutil;

use config::Config;
use gateway::Gateway;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub gateway: Gateway,
}
