//! Email message

use crate::domain::communication::{attachments::Attachment, email_addresses::EmailAddress};

/// An outbound email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
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

    /// The single file attached to the email
    pub attachment: Attachment,
}

impl OutboundMessage {
    /// Every address the message is delivered to: `to`, then `cc`, then `bcc`.
    pub fn recipients(&self) -> Vec<&EmailAddress> {
        std::iter::once(&self.to)
            .chain(self.cc.iter())
            .chain(self.bcc.iter())
            .collect()
    }
}
