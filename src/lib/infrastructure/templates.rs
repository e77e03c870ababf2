//! Template renderer implementations

pub mod tera;
