use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{FormatValidator, FormatVerdict, StorageService},
    },
    domain::models::file::{StoredFile, UploadRequest},
};

/// validate -> (store | reject). Shared by the JSON and form transports.
#[derive(Clone)]
pub struct FileReceiveService {
    storage: Arc<dyn StorageService>,
    validator: Arc<dyn FormatValidator>,
    max_size: u64,
}

impl FileReceiveService {
    pub fn new(
        storage: Arc<dyn StorageService>,
        validator: Arc<dyn FormatValidator>,
        max_size: u64,
    ) -> Self {
        Self {
            storage,
            validator,
            max_size,
        }
    }

    pub fn storage(&self) -> &Arc<dyn StorageService> {
        &self.storage
    }

    pub fn validator_name(&self) -> &'static str {
        self.validator.name()
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    pub async fn receive(&self, request: UploadRequest) -> Result<StoredFile, ApplicationError> {
        if request.file_name.trim().is_empty() {
            return Err(ApplicationError::BadRequest(
                "File name is required".to_string(),
            ));
        }

        if !request.validate_size(self.max_size) {
            warn!(
                "Rejected '{}': {} bytes exceeds limit of {}",
                request.file_name,
                request.size(),
                self.max_size
            );
            return Err(ApplicationError::PayloadTooLarge);
        }

        if let FormatVerdict::Rejected { reason } = self.validator.check(&request) {
            warn!(
                "Rejected '{}' ({} bytes) by {} validator: {}",
                request.file_name,
                request.size(),
                self.validator.name(),
                reason
            );
            return Err(ApplicationError::InvalidFileFormat(reason));
        }

        let stored = self.storage.store(&request).await?;

        info!(
            "Received '{}' ({} bytes), stored as {}",
            stored.original_name, stored.size, stored.stored_name
        );

        Ok(stored)
    }
}
