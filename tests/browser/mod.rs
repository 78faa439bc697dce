//! Browser automation behind a small trait so the upload scenarios do not
//! depend on a particular driver.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;
use thirtyfour::prelude::*;

use crate::common::{spawn_app, stored_files, TestApp};

pub type BrowserError = Box<dyn std::error::Error + Send + Sync>;
pub type BrowserResult<T> = Result<T, BrowserError>;

#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn open(&self, url: &str) -> BrowserResult<()>;
    async fn choose_file(&self, input_name: &str, path: &Path) -> BrowserResult<()>;
    async fn click(&self, css: &str) -> BrowserResult<()>;
    /// Waits for the element to appear, then returns its visible text.
    async fn text_of(&self, css: &str) -> BrowserResult<String>;
    async fn attribute_of(&self, css: &str, attribute: &str) -> BrowserResult<Option<String>>;
}

pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    pub async fn connect(webdriver_url: &str) -> BrowserResult<Self> {
        let caps = DesiredCapabilities::chrome();
        let driver = WebDriver::new(webdriver_url, caps).await?;
        Ok(Self { driver })
    }

    pub async fn quit(self) -> BrowserResult<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn open(&self, url: &str) -> BrowserResult<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn choose_file(&self, input_name: &str, path: &Path) -> BrowserResult<()> {
        let input = self.driver.find(By::Name(input_name)).await?;
        input.send_keys(path.display().to_string()).await?;
        Ok(())
    }

    async fn click(&self, css: &str) -> BrowserResult<()> {
        self.driver.find(By::Css(css)).await?.click().await?;
        Ok(())
    }

    async fn text_of(&self, css: &str) -> BrowserResult<String> {
        let element = self.driver.query(By::Css(css)).first().await?;
        Ok(element.text().await?)
    }

    async fn attribute_of(&self, css: &str, attribute: &str) -> BrowserResult<Option<String>> {
        let element = self.driver.query(By::Css(css)).first().await?;
        Ok(element.attr(attribute).await?)
    }
}

/// Where the browser points and how stored files are checked afterwards.
///
/// `E2E_BASE_URL` targets an already running server; otherwise the service is
/// spawned in-process with its storage in a temp dir. `E2E_STORAGE_DIR` lets
/// the suite clean up what it stored on an external server.
pub struct E2eTarget {
    pub base_url: String,
    pub webdriver_url: String,
    storage_dir: Option<PathBuf>,
    local: Option<(TestApp, tokio::task::JoinHandle<()>)>,
}

impl E2eTarget {
    pub async fn from_env() -> Self {
        let webdriver_url =
            std::env::var("WEBDRIVER_URL").unwrap_or_else(|_| "http://localhost:4444".to_string());

        match std::env::var("E2E_BASE_URL") {
            Ok(base_url) => Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                webdriver_url,
                storage_dir: std::env::var("E2E_STORAGE_DIR").ok().map(PathBuf::from),
                local: None,
            },
            Err(_) => {
                let app = TestApp::new().await;
                let (base_url, handle) = spawn_app(&app).await;
                Self {
                    base_url,
                    webdriver_url,
                    storage_dir: Some(app.storage_path().to_path_buf()),
                    local: Some((app, handle)),
                }
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads a stored file back through the service.
    pub async fn fetch_stored(&self, stored_name: &str) -> BrowserResult<Vec<u8>> {
        let response = reqwest::get(self.url(&format!("/file/stored/{}", stored_name)))
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Files currently in the server's storage directory, when it is known.
    pub fn stored_file_count(&self) -> Option<usize> {
        self.storage_dir.as_deref().map(|dir| stored_files(dir).len())
    }

    pub fn stored_file_guard(&self, stored_name: &str) -> StoredFileGuard {
        StoredFileGuard {
            path: self.storage_dir.as_ref().map(|dir| dir.join(stored_name)),
        }
    }
}

impl Drop for E2eTarget {
    fn drop(&mut self) {
        if let Some((_, handle)) = &self.local {
            handle.abort();
        }
    }
}

/// Removes a file the server stored, on every exit path of the test.
pub struct StoredFileGuard {
    path: Option<PathBuf>,
}

impl Drop for StoredFileGuard {
    fn drop(&mut self) {
        if let Some(path) = &self.path {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// A file on local disk for the browser to pick; removed with its directory.
pub struct FixtureFile {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureFile {
    pub fn new(file_name: &str, content: &[u8]) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(file_name);
        std::fs::write(&path, content)?;
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
