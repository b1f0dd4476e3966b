//! Email composition and dispatch.

pub mod attachments;
pub mod dispatch;
pub mod email_addresses;
pub mod mailer;
