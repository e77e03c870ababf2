//! SMTP transport implementation

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{header::ContentType, Attachment as AttachmentPart, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    SmtpTransport, Transport as _,
};
use tracing::debug;

use crate::domain::composition::{
    Attachment, BodyPart, Message, MimeType, Transport, TransportError,
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender email address
    #[clap(long, env = "SMTP_SENDER")]
    pub sender: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the underlying SMTP transport
    pub fn mailer(&self) -> Result<SmtpTransport, TransportError> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

#[async_trait]
impl Transport for SmtpMailer {
    async fn deliver(&self, message: Message) -> Result<u64, TransportError> {
        let accepted = message.to.len() as u64;
        let email = encode(&self.config.sender, &message)?;

        match self.mailer()?.send(&email) {
            Ok(_) => Ok(accepted),
            Err(err) => {
                debug!("smtp send failed: {:?}", err);

                Err(TransportError::SendError)
            }
        }
    }
}

/// Encodes a domain message as a MIME message.
fn encode(sender: &str, message: &Message) -> Result<lettre::Message, TransportError> {
    let mut builder = lettre::Message::builder()
        .from(sender.parse()?)
        .subject(message.subject.clone());

    for recipient in &message.to {
        builder = builder.to(recipient.parse()?);
    }

    let email = match (message.body.as_slice(), message.attachments.as_slice()) {
        ([], []) => builder.body(String::new())?,
        ([part], []) => builder.singlepart(encode_body(part))?,
        (parts, []) => builder.multipart(encode_alternative(parts))?,
        (parts, attachments) => builder.multipart(encode_mixed(parts, attachments)?)?,
    };

    Ok(email)
}

fn encode_body(part: &BodyPart) -> SinglePart {
    let header = match part.mime_type {
        MimeType::Html => ContentType::TEXT_HTML,
        MimeType::Plain => ContentType::TEXT_PLAIN,
    };

    SinglePart::builder().header(header).body(part.content.clone())
}

/// MIME alternative parts rank upwards, so the primary body goes last.
fn encode_alternative(parts: &[BodyPart]) -> MultiPart {
    let mut alternative = MultiPart::alternative().build();

    for part in parts.iter().rev() {
        alternative = alternative.singlepart(encode_body(part));
    }

    alternative
}

fn encode_mixed(
    parts: &[BodyPart],
    attachments: &[Attachment],
) -> Result<MultiPart, TransportError> {
    let mut mixed = match parts {
        [] => MultiPart::mixed().build(),
        [part] => MultiPart::mixed().singlepart(encode_body(part)),
        parts => MultiPart::mixed().multipart(encode_alternative(parts)),
    };

    for attachment in attachments {
        mixed = mixed.singlepart(encode_attachment(attachment)?);
    }

    Ok(mixed)
}

fn encode_attachment(attachment: &Attachment) -> Result<SinglePart, TransportError> {
    let file_name = attachment
        .file_name
        .clone()
        .unwrap_or_else(|| attachment.source_path.clone());

    let content_type = match &attachment.content_type {
        Some(content_type) => ContentType::parse(content_type)?,
        None => ContentType::parse("application/octet-stream")?,
    };

    Ok(AttachmentPart::new(file_name).body(attachment.content.clone(), content_type))
}
