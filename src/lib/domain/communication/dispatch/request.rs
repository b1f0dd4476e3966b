//! Send request

use std::path::PathBuf;

use crate::domain::communication::email_addresses::EmailAddress;

/// The message side of a send, validated at the configuration boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendMailRequest {
    /// The sender of the email
    pub from: EmailAddress,

    /// The primary recipient of the email
    pub to: EmailAddress,

    /// Carbon-copy recipients
    pub cc: Vec<EmailAddress>,

    /// Blind carbon-copy recipients
    pub bcc: Vec<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub body: String,

    /// Path to the file to attach
    pub attachment_path: PathBuf,
}
