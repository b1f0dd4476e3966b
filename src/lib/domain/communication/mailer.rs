//! Email service module

mod errors;
mod message;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub use errors::MailerError;
pub use message::OutboundMessage;

/// Delivers composed messages
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email over a single session, closing it before returning.
    ///
    /// # Arguments
    /// * `message` - The [`OutboundMessage`] to deliver to all of its recipients.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_message(&self, message: &OutboundMessage) -> Result<(), MailerError>;
    }
}
