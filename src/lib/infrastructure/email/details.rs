//! Message details supplied by the CI environment

use std::path::PathBuf;

use clap::Parser;

use crate::domain::communication::{dispatch::SendMailRequest, email_addresses::EmailAddress};

use super::errors::ConfigError;

/// Message details
#[derive(Clone, Default, Debug, Parser)]
pub struct EmailDetails {
    /// The sender email address
    #[arg(long, env = "EMAIL_FROM")]
    pub from: String,

    /// The primary recipient
    #[arg(long, env = "EMAIL_TO")]
    pub to: String,

    /// Comma-separated carbon-copy recipients
    #[arg(long, env = "EMAIL_CC")]
    pub cc: Option<String>,

    /// Comma-separated blind carbon-copy recipients
    #[arg(long, env = "EMAIL_BCC")]
    pub bcc: Option<String>,

    /// The subject line
    #[arg(long, env = "EMAIL_SUBJECT")]
    pub subject: String,

    /// The plain text body
    #[arg(long, env = "EMAIL_BODY", default_value = "")]
    pub body: String,

    /// Path to the file to attach
    #[arg(long = "attachment", env = "EMAIL_ATTACHMENTS")]
    pub attachment: PathBuf,
}

fn address(field: &'static str, raw: &str) -> Result<EmailAddress, ConfigError> {
    EmailAddress::new(raw).map_err(|source| ConfigError::InvalidAddress { field, source })
}

impl TryFrom<EmailDetails> for SendMailRequest {
    type Error = ConfigError;

    fn try_from(details: EmailDetails) -> Result<Self, Self::Error> {
        if details.subject.trim().is_empty() {
            return Err(ConfigError::MissingField("EMAIL_SUBJECT"));
        }

        if details.attachment.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("EMAIL_ATTACHMENTS"));
        }

        Ok(SendMailRequest {
            from: address("EMAIL_FROM", &details.from)?,
            to: address("EMAIL_TO", &details.to)?,
            cc: EmailAddress::parse_list(details.cc.as_deref()),
            bcc: EmailAddress::parse_list(details.bcc.as_deref()),
            subject: details.subject,
            body: details.body,
            attachment_path: details.attachment,
        })
    }
}
