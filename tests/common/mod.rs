#![allow(dead_code)]

use std::path::{Path, PathBuf};

use file_receiver::{build_router, AppState, ServerConfig};
use tempfile::TempDir;
use tokio::{net::TcpListener, task::JoinHandle};

pub const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Application state whose storage root lives in a temp dir removed on drop.
pub struct TestApp {
    pub state: AppState,
    pub storage: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(customize: impl FnOnce(&mut ServerConfig)) -> Self {
        let storage = tempfile::tempdir().expect("create storage dir");
        let mut config = ServerConfig {
            storage_dir: storage.path().to_path_buf(),
            ..ServerConfig::default()
        };
        customize(&mut config);

        let state = AppState::from_config(config)
            .await
            .expect("build application state");

        Self { state, storage }
    }

    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    pub fn storage_path(&self) -> &Path {
        self.storage.path()
    }

    pub fn stored_files(&self) -> Vec<PathBuf> {
        stored_files(self.storage.path())
    }
}

/// Regular files directly under `dir`, sorted.
pub fn stored_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("read storage dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

/// Serves the app on an ephemeral local port.
pub async fn spawn_app(app: &TestApp) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let router = app.router();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server error");
    });
    (format!("http://{}", addr), handle)
}
