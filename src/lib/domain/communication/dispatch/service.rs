//! Email dispatch service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::communication::{
    attachments::Attachment,
    mailer::{Mailer, OutboundMessage},
};

use super::{SendMailError, SendMailRequest};

/// Reads the attachment, composes the message and hands it to a [`Mailer`]
#[derive(Debug, Clone)]
pub struct DispatchService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> DispatchService<M>
where
    M: Mailer,
{
    /// Creates a new dispatch service.
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }

    /// Sends one email with one attachment.
    ///
    /// The attachment is read before the mailer is involved, so an unreadable file never
    /// results in a network connection.
    ///
    /// # Arguments
    /// * `request` - The validated [`SendMailRequest`].
    ///
    /// # Returns
    /// - [`Ok`] once the server has accepted the message.
    /// - [`Err`] containing a [`SendMailError`] describing the first failure.
    pub async fn send_mail(&self, request: SendMailRequest) -> Result<(), SendMailError> {
        let attachment = Attachment::from_path(&request.attachment_path).await?;

        let message = OutboundMessage {
            from: request.from,
            to: request.to,
            cc: request.cc,
            bcc: request.bcc,
            subject: request.subject,
            body: request.body,
            attachment,
        };

        debug!(
            "composed message for {} recipient(s) with attachment {}",
            message.recipients().len(),
            message.attachment.filename
        );

        self.mailer.send_message(&message).await?;

        info!("email sent to {}", message.to);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use testresult::TestResult;

    use crate::domain::communication::{
        email_addresses::{EmailAddress, EmailAddressError},
        mailer::{MailerError, MockMailer},
    };

    use super::*;

    fn scratch_file(name: &str, content: &[u8]) -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("ci-mailer-dispatch-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(name);
        std::fs::write(&path, content)?;

        Ok(path)
    }

    fn request(attachment_path: PathBuf, cc: &str) -> Result<SendMailRequest, EmailAddressError> {
        Ok(SendMailRequest {
            from: EmailAddress::new("ci@x.com")?,
            to: EmailAddress::new("a@x.com")?,
            cc: EmailAddress::parse_list(Some(cc)),
            bcc: vec![],
            subject: "S".to_string(),
            body: "B".to_string(),
            attachment_path,
        })
    }

    #[tokio::test]
    async fn test_send_mail_success() -> TestResult {
        let path = scratch_file("build.log", b"build ok")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_message()
            .times(1)
            .withf(|message| {
                message.recipients().len() == 1
                    && message.to.as_str() == "a@x.com"
                    && message.subject == "S"
                    && message.body == "B"
                    && message.attachment.filename == "build.log"
                    && message.attachment.content == b"build ok"
            })
            .returning(|_| Ok(()));

        let service = DispatchService::new(Arc::new(mailer));

        service.send_mail(request(path, "")?).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_delivers_to_cc_recipients() -> TestResult {
        let path = scratch_file("cc.log", b"cc")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_message()
            .times(1)
            .withf(|message| {
                let recipients: Vec<&str> = message
                    .recipients()
                    .into_iter()
                    .map(EmailAddress::as_str)
                    .collect();

                recipients == vec!["a@x.com", "b@x.com", "c@x.com"]
            })
            .returning(|_| Ok(()));

        let service = DispatchService::new(Arc::new(mailer));

        service.send_mail(request(path, "b@x.com,c@x.com")?).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_missing_attachment_never_reaches_mailer() -> TestResult {
        let path = std::env::temp_dir().join("ci-mailer-missing-attachment.bin");

        let mut mailer = MockMailer::new();

        mailer.expect_send_message().times(0);

        let service = DispatchService::new(Arc::new(mailer));

        let result = service.send_mail(request(path, "")?).await;

        assert!(matches!(result, Err(SendMailError::Attachment(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_invalid_credentials() -> TestResult {
        let path = scratch_file("auth.log", b"auth")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_message()
            .times(1)
            .returning(|_| Err(MailerError::InvalidCredentials));

        let service = DispatchService::new(Arc::new(mailer));

        let result = service.send_mail(request(path, "")?).await;

        assert!(matches!(result, Err(SendMailError::InvalidCredentials)));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_mail_transport_failure() -> TestResult {
        let path = scratch_file("transport.log", b"transport")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_message()
            .times(1)
            .returning(|_| Err(MailerError::SendError(anyhow::anyhow!("connection refused"))));

        let service = DispatchService::new(Arc::new(mailer));

        let result = service.send_mail(request(path, "")?).await;

        assert!(matches!(
            result,
            Err(SendMailError::DeliveryFailed(MailerError::SendError(_)))
        ));

        Ok(())
    }
}
