mod error;
mod local_storage;
mod signature_validator;
mod text_validator;

pub use error::StorageError;
pub use local_storage::LocalDiskStorageService;
pub use signature_validator::SignatureValidator;
pub use text_validator::Utf8TextValidator;

use std::{path::Path, sync::Arc};

use crate::{
    application::services::{FormatValidator, StorageService},
    domain::config::server::ValidatorKind,
};

pub async fn create_storage_service(
    storage_dir: &Path,
) -> Result<Arc<dyn StorageService>, StorageError> {
    let service = LocalDiskStorageService::new(storage_dir).await?;
    Ok(Arc::new(service))
}

pub fn create_format_validator(kind: ValidatorKind) -> Arc<dyn FormatValidator> {
    match kind {
        ValidatorKind::Signature => Arc::new(SignatureValidator),
        ValidatorKind::Utf8Text => Arc::new(Utf8TextValidator),
    }
}
