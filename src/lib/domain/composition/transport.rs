//! Message transport contract

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::{errors::TransportError, message::Message};

/// Message transport
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Deliver an assembled message.
    ///
    /// Takes ownership of the message for delivery.
    ///
    /// # Returns
    /// A [`Result`] containing the number of recipients the transport
    /// accepted the message for, or a [`TransportError`].
    async fn deliver(&self, message: Message) -> Result<u64, TransportError>;
}

#[cfg(test)]
mock! {
    pub Transport {}

    #[async_trait]
    impl Transport for Transport {
        async fn deliver(&self, message: Message) -> Result<u64, TransportError>;
    }
}
