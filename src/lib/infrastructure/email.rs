//! Email delivery over SMTP, configured from the environment.

pub mod details;
pub mod errors;
pub mod smtp;
