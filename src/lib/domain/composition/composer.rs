//! Message composer service

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[cfg(test)]
use mockall::mock;

use super::{
    attachments::{AttachmentLoader, AttachmentOptions, AttachmentSpec},
    errors::{AttachmentError, ComposeError, RenderError},
    message::{Message, MimeType},
    renderer::TemplateRenderer,
    transport::Transport,
};

/// Message composer
///
/// Renders a named template into body variants, assembles a message with
/// subject, recipient and attachments, and hands it to the transport for
/// delivery.
#[async_trait]
pub trait MessageComposer: Send + Sync + 'static {
    /// Render the template variants and assemble a message.
    ///
    /// `<template>.html` and `<template>.txt` are both attempted; a
    /// missing variant leaves that body absent. When both render, the
    /// HTML body is primary and the plain text becomes an alternative
    /// part. Subject and recipient are set verbatim.
    ///
    /// # Arguments
    /// * `subject` - The subject of the message.
    /// * `to` - The recipient of the message.
    /// * `template` - The logical template name.
    /// * `data` - The data mapping handed to the renderer.
    ///
    /// # Returns
    /// The assembled [`Message`] with no attachments, or a
    /// [`RenderError`] for any rendering failure other than a missing
    /// template.
    fn create_message(
        &self,
        subject: &str,
        to: &str,
        template: &str,
        data: &Value,
    ) -> Result<Message, RenderError>;

    /// Load the given attachments and append them to the message.
    ///
    /// Each entry's key is the file path, unless the entry carries a
    /// path value, which then takes precedence over the key. Non-empty
    /// `file_name` and `content_type` options override what the loader
    /// derived.
    ///
    /// # Returns
    /// The same message with the attachments appended, or an
    /// [`AttachmentError`] when a file could not be loaded.
    async fn attach(
        &self,
        message: Message,
        attachments: &[(String, AttachmentSpec)],
    ) -> Result<Message, AttachmentError>;

    /// Compose a message and deliver it.
    ///
    /// # Returns
    /// The number of recipients the transport accepted, unmodified, or
    /// the first [`ComposeError`] in the render, attach, deliver chain.
    async fn send(
        &self,
        subject: &str,
        to: &str,
        template: &str,
        data: &Value,
        attachments: &[(String, AttachmentSpec)],
    ) -> Result<u64, ComposeError>;
}

#[cfg(test)]
mock! {
    pub MessageComposer {}

    #[async_trait]
    impl MessageComposer for MessageComposer {
        fn create_message(
            &self,
            subject: &str,
            to: &str,
            template: &str,
            data: &Value,
        ) -> Result<Message, RenderError>;
        async fn attach(
            &self,
            message: Message,
            attachments: &[(String, AttachmentSpec)],
        ) -> Result<Message, AttachmentError>;
        async fn send(
            &self,
            subject: &str,
            to: &str,
            template: &str,
            data: &Value,
            attachments: &[(String, AttachmentSpec)],
        ) -> Result<u64, ComposeError>;
    }
}

/// Message composer implementation
#[derive(Debug, Clone)]
pub struct MessageComposerImpl<R, T, L>
where
    R: TemplateRenderer,
    T: Transport,
    L: AttachmentLoader,
{
    renderer: Arc<R>,
    transport: Arc<T>,
    loader: Arc<L>,
}

impl<R, T, L> MessageComposerImpl<R, T, L>
where
    R: TemplateRenderer,
    T: Transport,
    L: AttachmentLoader,
{
    /// Creates a new message composer.
    pub fn new(renderer: Arc<R>, transport: Arc<T>, loader: Arc<L>) -> Self {
        Self {
            renderer,
            transport,
            loader,
        }
    }

    /// Renders one template variant, mapping a missing template to an
    /// absent body.
    fn render_variant(&self, name: &str, data: &Value) -> Result<Option<String>, RenderError> {
        match self.renderer.render(name, data) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.is_not_found() => {
                debug!(template = name, "template variant not found, skipping");

                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl<R, T, L> MessageComposer for MessageComposerImpl<R, T, L>
where
    R: TemplateRenderer,
    T: Transport,
    L: AttachmentLoader,
{
    fn create_message(
        &self,
        subject: &str,
        to: &str,
        template: &str,
        data: &Value,
    ) -> Result<Message, RenderError> {
        let html = self.render_variant(&format!("{template}.html"), data)?;
        let text = self.render_variant(&format!("{template}.txt"), data)?;

        let mut message = Message::new(subject, to);

        match (html, text) {
            (Some(html), Some(text)) => {
                message.set_body(html, MimeType::Html);
                message.add_part(text, MimeType::Plain);
            }
            (Some(html), None) => message.set_body(html, MimeType::Html),
            (None, Some(text)) => message.set_body(text, MimeType::Plain),
            (None, None) => {}
        }

        Ok(message)
    }

    async fn attach(
        &self,
        mut message: Message,
        attachments: &[(String, AttachmentSpec)],
    ) -> Result<Message, AttachmentError> {
        for (key, spec) in attachments {
            let (path, options) = match spec {
                AttachmentSpec::Path(path) => (path.as_str(), AttachmentOptions::default()),
                AttachmentSpec::Options(options) => (key.as_str(), options.clone()),
            };

            let mut attachment = self.loader.from_path(path).await?;

            if let Some(file_name) = options.file_name.filter(|name| !name.is_empty()) {
                attachment.file_name = Some(file_name);
            }

            if let Some(content_type) = options.content_type.filter(|ct| !ct.is_empty()) {
                attachment.content_type = Some(content_type);
            }

            message.attachments.push(attachment);
        }

        Ok(message)
    }

    async fn send(
        &self,
        subject: &str,
        to: &str,
        template: &str,
        data: &Value,
        attachments: &[(String, AttachmentSpec)],
    ) -> Result<u64, ComposeError> {
        let message = self.create_message(subject, to, template, data)?;
        let message = self.attach(message, attachments).await?;

        Ok(self.transport.deliver(message).await?)
    }
}
