//! Mailer errors

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The server rejected the supplied credentials
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An address could not be used in the message
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// An error occurred while sending the email
    #[error("an error occurred while sending the email")]
    SendError(#[source] anyhow::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}
