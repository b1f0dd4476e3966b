//! Dispatch errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{attachments::AttachmentError, mailer::MailerError};

/// Errors that can occur when sending an email
#[derive(Debug, Error)]
pub enum SendMailError {
    /// The attachment could not be read; nothing was sent
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The server rejected the credentials; nothing was sent
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Any other connection or protocol failure
    #[error("could not deliver the email")]
    DeliveryFailed(#[source] MailerError),
}

impl From<MailerError> for SendMailError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> SendMailError");

        match err {
            MailerError::InvalidCredentials => SendMailError::InvalidCredentials,
            other => SendMailError::DeliveryFailed(other),
        }
    }
}
