//! Attachment loading implementations

pub mod fs;
