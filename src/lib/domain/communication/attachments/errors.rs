//! Attachment errors

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading an attachment from disk
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// The path does not end in a file name
    #[error("attachment path {0:?} has no file name")]
    MissingFileName(PathBuf),

    /// The file could not be opened or read
    #[error("could not read attachment {path:?}")]
    Unreadable {
        /// The path that was read
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}
