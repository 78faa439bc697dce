use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{StoredFile, UploadRequest},
};

#[async_trait]
pub trait StorageService: Send + Sync {
    async fn store(&self, request: &UploadRequest) -> Result<StoredFile, ApplicationError>;
    async fn read(&self, stored_name: &str) -> Result<Vec<u8>, ApplicationError>;
    fn location(&self) -> String;
}
