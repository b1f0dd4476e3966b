//! Configuration errors

use thiserror::Error;

use crate::domain::communication::email_addresses::EmailAddressError;

/// Errors raised while turning environment variables into a send request
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value is empty
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// An address value is unusable
    #[error("{field}: {source}")]
    InvalidAddress {
        /// The variable holding the address
        field: &'static str,

        /// Why the address was rejected
        #[source]
        source: EmailAddressError,
    },

    /// STARTTLS was requested without a username and password
    #[error("SMTP_USERNAME and SMTP_PASSWORD are required when SMTP_ENABLE_TLS is set")]
    MissingCredentials,
}
