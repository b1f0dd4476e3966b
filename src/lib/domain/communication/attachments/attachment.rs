//! File attachment

use std::path::Path;

use tracing::debug;

use super::AttachmentError;

/// A file attached to an outbound message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// The file name announced in the `Content-Disposition` header
    pub filename: String,

    /// The raw file contents
    pub content: Vec<u8>,
}

impl Attachment {
    /// Create an attachment from in-memory contents
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    /// Reads the file at `path` into memory.
    ///
    /// The file name is the final component of `path`. The file handle is closed before
    /// this returns, on success and on failure.
    ///
    /// # Errors
    /// - [`AttachmentError::MissingFileName`] if `path` has no final component.
    /// - [`AttachmentError::Unreadable`] if the file cannot be opened or read.
    pub async fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AttachmentError::MissingFileName(path.to_path_buf()))?;

        let content = tokio::fs::read(path)
            .await
            .map_err(|source| AttachmentError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("read {} bytes from {:?}", content.len(), path);

        Ok(Self::new(filename, content))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use testresult::TestResult;

    use super::*;

    fn scratch_file(name: &str, content: &[u8]) -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("ci-mailer-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(name);
        std::fs::write(&path, content)?;

        Ok(path)
    }

    #[tokio::test]
    async fn test_from_path_reads_contents_and_file_name() -> TestResult {
        let path = scratch_file("report.bin", &[0, 159, 146, 150, 255])?;

        let attachment = Attachment::from_path(&path).await?;

        assert_eq!(attachment.filename, "report.bin");
        assert_eq!(attachment.content, vec![0, 159, 146, 150, 255]);

        Ok(())
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("ci-mailer-does-not-exist.txt");

        let result = Attachment::from_path(&path).await;

        assert!(matches!(result, Err(AttachmentError::Unreadable { .. })));
    }

    #[tokio::test]
    async fn test_from_path_without_file_name() {
        let result = Attachment::from_path(Path::new("/")).await;

        assert!(matches!(result, Err(AttachmentError::MissingFileName(_))));
    }
}
