//! Server-rendered admin frontend that proxies to the backend API.

pub mod client;
pub mod flash;
pub mod form;
pub mod handlers;
pub mod render;
pub mod upload;
pub mod view;

pub use client::BackendClient;
pub use upload::UploadStore;

use crate::config::Config;
use crate::error::ProxyError;
use chrono::FixedOffset;

/// Shared state for the admin routes.
#[derive(Clone)]
pub struct AdminState {
    pub backend: BackendClient,
    pub uploads: UploadStore,
    /// Offset used when printing dates on admin pages.
    pub display_offset: FixedOffset,
}

impl AdminState {
    pub fn from_config(config: &Config) -> Result<Self, ProxyError> {
        let display_offset = FixedOffset::east_opt(config.display_utc_offset_hours * 3600)
            .ok_or_else(|| ProxyError::Config(format!("bad UTC offset {}", config.display_utc_offset_hours)))?;
        Ok(AdminState {
            backend: BackendClient::new(&config.api_url, config.http_timeout)?,
            uploads: UploadStore::new(config.upload_dir.clone()),
            display_offset,
        })
    }
}
