//! Domain layer

pub mod composition;
