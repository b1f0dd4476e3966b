//! Email Address

use std::fmt;

use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,
}

/// An email address
///
/// Only emptiness is checked here. Whether the address is deliverable is left to the SMTP
/// library and the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Parses a comma-separated list of addresses, skipping blank entries.
    ///
    /// A missing or blank list yields an empty vector.
    pub fn parse_list(raw: Option<&str>) -> Vec<Self> {
        raw.unwrap_or_default()
            .split(',')
            .filter_map(|entry| Self::new(entry).ok())
            .collect()
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
