use std::path::Path;

use crate::error::{ApiError, ApiResult};

/// # Documentation
/// A document selected by the user, held in memory until it is hashed or
/// uploaded.
///
/// - `name`: file name as presented to the server (no directory part)
/// - `content`: raw bytes sent as the multipart `file` part
/// - `mime_type`: optional content type for the multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a document from disk, naming it after the path's final component.
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ApiError::Io(format!("Path '{}' has no file name", path.display())))?
            .to_string();
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Io(format!("Failed to read '{}': {e}", path.display())))?;
        Ok(Self::new(name, content))
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
