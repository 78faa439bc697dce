use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::models::file::{is_safe_stored_name, StoredFile, UploadRequest},
    services::error::StorageError,
};

/// Stores uploads as plain files under a single root directory.
pub struct LocalDiskStorageService {
    root: PathBuf,
}

impl LocalDiskStorageService {
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        info!("Local storage ready at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, stored_name: &str) -> Result<PathBuf, StorageError> {
        // Stored names are flat; anything that would leave the root is refused.
        if !is_safe_stored_name(stored_name) {
            return Err(StorageError::InvalidName(stored_name.to_string()));
        }
        Ok(self.root.join(stored_name))
    }

    fn staging_path(&self, path: &Path) -> Result<PathBuf, StorageError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StorageError::InternalError("Stored path has no file name".into()))?;
        Ok(self.root.join(format!(".{}.part", file_name)))
    }

    async fn write_atomically(&self, path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let staging = self.staging_path(path)?;

        let written = match fs::write(&staging, content).await {
            Ok(()) => fs::rename(&staging, path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            // A partial staging file must not outlive a failed store.
            if let Err(cleanup) = fs::remove_file(&staging).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not remove {}: {}", staging.display(), cleanup);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl StorageService for LocalDiskStorageService {
    async fn store(&self, request: &UploadRequest) -> Result<StoredFile, ApplicationError> {
        let stored_name = request.derive_stored_name();
        let path = self.resolve(&stored_name)?;

        self.write_atomically(&path, &request.content).await?;
        debug!("Wrote {} bytes to {}", request.size(), path.display());

        Ok(StoredFile {
            original_name: request.file_name.clone(),
            stored_name,
            path,
            size: request.size(),
            received_at: Utc::now(),
        })
    }

    async fn read(&self, stored_name: &str) -> Result<Vec<u8>, ApplicationError> {
        let path = self.resolve(stored_name)?;

        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(stored_name.to_string()).into())
            }
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
