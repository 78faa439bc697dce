use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A client's file submission, independent of the transport it arrived on.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadRequest {
    pub fn new(file_name: String, content: Vec<u8>) -> Self {
        Self { file_name, content }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn validate_size(&self, max_size: u64) -> bool {
        self.size() <= max_size
    }

    /// Name the file is persisted under: a fresh UUID followed by the
    /// sanitized last path component of the client-supplied name.
    pub fn derive_stored_name(&self) -> String {
        format!("{}-{}", Uuid::new_v4(), safe_file_name(&self.file_name))
    }
}

/// Longest sanitized name kept. With the UUID prefix and the staging suffix
/// added, the on-disk name stays under the common 255-byte limit.
pub const MAX_SAFE_NAME_LEN: usize = 200;

// Extensions longer than this are treated as part of the stem when truncating.
const MAX_EXTENSION_LEN: usize = 16;

fn is_safe_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

/// True when `name` is a flat, non-hidden name made only of safe characters.
pub fn is_safe_stored_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && name.chars().all(is_safe_name_char)
}

/// Keeps only the final path component, replaces anything outside
/// `[A-Za-z0-9._-]` with `_` and caps the result at [`MAX_SAFE_NAME_LEN`]
/// bytes, keeping a short extension intact.
pub fn safe_file_name(file_name: &str) -> String {
    let last = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();

    let safe = last
        .chars()
        .map(|c| if is_safe_name_char(c) { c } else { '_' })
        .collect::<String>();
    let safe = truncate_keeping_extension(safe);

    // "." and ".." must never reach the filesystem as a name
    if safe.is_empty() || safe.chars().all(|c| c == '.') {
        "file".to_string()
    } else {
        safe
    }
}

// `name` is ASCII at this point, so byte offsets are char boundaries.
fn truncate_keeping_extension(name: String) -> String {
    if name.len() <= MAX_SAFE_NAME_LEN {
        return name;
    }

    let extension = match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot <= MAX_EXTENSION_LEN => &name[dot..],
        _ => "",
    };
    format!(
        "{}{}",
        &name[..MAX_SAFE_NAME_LEN - extension.len()],
        extension
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "storedName")]
    pub stored_name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub size: u64,
    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
}
