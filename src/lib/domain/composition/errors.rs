//! Error types for message composition

use lettre::address::AddressError;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when rendering a template
#[derive(Debug, Error)]
pub enum RenderError {
    /// The named template is not known to the renderer
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The template exists but could not be rendered
    #[error("template could not be rendered: {0}")]
    InvalidTemplate(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl RenderError {
    /// Whether this is the missing-template case, the only kind the
    /// composer suppresses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound(_))
    }
}

/// Errors that can occur when loading an attachment
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The attachment file does not exist
    #[error("attachment file not found: {0}")]
    FileNotFound(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when delivering a message
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport could not deliver the message
    #[error("message could not be delivered")]
    SendError,

    /// A sender or recipient address was rejected
    #[error("invalid address")]
    InvalidAddress,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<AddressError> for TransportError {
    fn from(err: AddressError) -> Self {
        debug!("AddressError: {:?}", err);

        TransportError::InvalidAddress
    }
}

impl From<lettre::error::Error> for TransportError {
    fn from(err: lettre::error::Error) -> Self {
        debug!("lettre Error: {:?}", err);

        TransportError::UnknownError(err.into())
    }
}

impl From<lettre::transport::smtp::Error> for TransportError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        debug!("smtp Error: {:?}", err);

        TransportError::UnknownError(err.into())
    }
}

impl From<lettre::message::header::ContentTypeErr> for TransportError {
    fn from(err: lettre::message::header::ContentTypeErr) -> Self {
        debug!("ContentTypeErr: {:?}", err);

        TransportError::UnknownError(err.into())
    }
}

/// Errors that can occur when composing and sending a message
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Rendering failed for a reason other than a missing template
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An attachment could not be loaded
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The message could not be delivered
    #[error(transparent)]
    Transport(#[from] TransportError),
}
