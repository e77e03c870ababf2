//! Email message

use std::fmt;

use super::attachments::Attachment;

/// The MIME type of a body variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    /// `text/html`
    Html,

    /// `text/plain`
    Plain,
}

impl MimeType {
    /// The MIME type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Plain => "text/plain",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rendered representation of the message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPart {
    /// The rendered content
    pub content: String,

    /// The MIME type of the content
    pub mime_type: MimeType,
}

/// An assembled email message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The subject of the email
    pub subject: String,

    /// The recipients of the email, verbatim as supplied by the caller
    pub to: Vec<String>,

    /// Body variants; the first entry is the primary body, the remainder
    /// are alternative parts. May be empty when no variant rendered.
    pub body: Vec<BodyPart>,

    /// The attachments of the email
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Creates a message with a subject and a single recipient, no body
    /// and no attachments.
    pub fn new(subject: &str, to: &str) -> Self {
        Self {
            subject: subject.to_string(),
            to: vec![to.to_string()],
            body: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Sets the primary body of the message.
    pub fn set_body(&mut self, content: String, mime_type: MimeType) {
        self.body.insert(0, BodyPart { content, mime_type });
    }

    /// Appends an alternative body part.
    pub fn add_part(&mut self, content: String, mime_type: MimeType) {
        self.body.push(BodyPart { content, mime_type });
    }

    /// The primary body of the message, if one is set.
    pub fn primary_body(&self) -> Option<&BodyPart> {
        self.body.first()
    }
}
