//! Filesystem attachment loader

use std::{io, path::Path};

use async_trait::async_trait;

use crate::domain::composition::{Attachment, AttachmentError, AttachmentLoader};

/// Attachment loader reading from the local filesystem
///
/// The display name is derived from the final path component; the
/// content type is left for the transport to default.
#[derive(Debug, Default, Clone)]
pub struct FileSystemLoader;

impl FileSystemLoader {
    /// Creates a new filesystem loader.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AttachmentLoader for FileSystemLoader {
    async fn from_path(&self, path: &str) -> Result<Attachment, AttachmentError> {
        let content = tokio::fs::read(path).await.map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AttachmentError::FileNotFound(path.to_string()),
            _ => AttachmentError::UnknownError(err.into()),
        })?;

        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Attachment {
            source_path: path.to_string(),
            file_name,
            content_type: None,
            content,
        })
    }
}
