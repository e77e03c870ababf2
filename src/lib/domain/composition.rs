//! Message composition module.

mod attachments;
mod composer;
mod errors;
mod message;
mod renderer;
mod transport;

pub use attachments::{Attachment, AttachmentLoader, AttachmentOptions, AttachmentSpec};
pub use composer::{MessageComposer, MessageComposerImpl};
pub use errors::{AttachmentError, ComposeError, RenderError, TransportError};
pub use message::{BodyPart, Message, MimeType};
pub use renderer::TemplateRenderer;
pub use transport::Transport;

#[cfg(test)]
pub mod tests {
    pub use super::attachments::MockAttachmentLoader;
    pub use super::composer::MockMessageComposer;
    pub use super::renderer::MockTemplateRenderer;
    pub use super::transport::MockTransport;
}
