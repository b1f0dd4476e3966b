//! Attachments module.

mod attachment;
mod errors;

pub use attachment::Attachment;
pub use errors::AttachmentError;
