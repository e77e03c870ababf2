//! Attachments and the attachment loader contract

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::errors::AttachmentError;

/// A loaded attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// The path the attachment was loaded from
    pub source_path: String,

    /// The display name of the attachment, when derived or overridden
    pub file_name: Option<String>,

    /// The MIME content type of the attachment, when overridden; the
    /// transport supplies a default otherwise
    pub content_type: Option<String>,

    /// The raw attachment bytes
    pub content: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment loaded from the given path, with no display
    /// name or content type set.
    pub fn new(source_path: &str, content: Vec<u8>) -> Self {
        Self {
            source_path: source_path.to_string(),
            file_name: None,
            content_type: None,
            content,
        }
    }
}

/// Per-attachment overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentOptions {
    /// Display name override
    pub file_name: Option<String>,

    /// Content type override
    pub content_type: Option<String>,
}

/// One entry of an attachment mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSpec {
    /// The entry's value is the file path; the entry's key is ignored
    Path(String),

    /// The entry's key is the file path
    Options(AttachmentOptions),
}

/// Attachment loader
#[async_trait]
pub trait AttachmentLoader: Send + Sync + 'static {
    /// Load an attachment from a file path.
    ///
    /// # Arguments
    /// * `path` - The path of the file to load.
    ///
    /// # Returns
    /// A [`Result`] containing the loaded [`Attachment`], or an
    /// [`AttachmentError`] when the file is missing or unreadable.
    async fn from_path(&self, path: &str) -> Result<Attachment, AttachmentError>;
}

#[cfg(test)]
mock! {
    pub AttachmentLoader {}

    #[async_trait]
    impl AttachmentLoader for AttachmentLoader {
        async fn from_path(&self, path: &str) -> Result<Attachment, AttachmentError>;
    }
}
