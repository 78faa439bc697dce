use axum::extract::FromRef;
use std::sync::Arc;
use thiserror::Error;

use crate::{
    adapters::views::Views,
    application::services::FileReceiveService,
    domain::config::server::ServerConfig,
    services::{self, StorageError},
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Storage initialisation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Template initialisation failed: {0}")]
    Templates(#[from] minijinja::Error),
}

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub receive_service: FileReceiveService,
    pub views: Arc<Views>,
}

impl AppState {
    pub async fn from_config(config: ServerConfig) -> Result<Self, StartupError> {
        let storage = services::create_storage_service(&config.storage_dir).await?;
        let validator = services::create_format_validator(config.validator);
        let receive_service =
            FileReceiveService::new(storage, validator, config.max_upload_bytes as u64);

        Ok(Self {
            config: Arc::new(config),
            receive_service,
            views: Arc::new(Views::new()?),
        })
    }
}
