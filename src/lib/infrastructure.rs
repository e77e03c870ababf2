//! Infrastructure layer

pub mod attachments;
pub mod email;
pub mod templates;
