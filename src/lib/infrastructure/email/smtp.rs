//! SMTP email service implementation

use async_trait::async_trait;
use clap::{builder::BoolishValueParser, ArgAction, Parser};
use lettre::{
    address::AddressError,
    message::{
        header::{ContentTransferEncoding, ContentType},
        Attachment, Body, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::{
        self,
        authentication::Credentials,
        client::{Tls, TlsParameters},
        response::Code,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info, warn};

use crate::domain::communication::{
    email_addresses::EmailAddress,
    mailer::{Mailer, MailerError, OutboundMessage},
};

use super::errors::ConfigError;

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// Upgrade the connection with STARTTLS and authenticate
    #[arg(
        long,
        env = "SMTP_ENABLE_TLS",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "false"
    )]
    pub enable_tls: bool,

    /// The SMTP host
    #[arg(long, env = "SMTP_SERVER_ADDRESS")]
    pub host: String,

    /// The SMTP port
    #[arg(long, env = "SMTP_SERVER_PORT")]
    pub port: u16,

    /// The SMTP username
    #[arg(long, env = "SMTP_USERNAME")]
    pub username: Option<String>,

    /// The SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Verify the server's TLS certificate
    #[arg(
        long,
        env = "SMTP_VERIFY_TLS",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "true"
    )]
    pub verify_tls: bool,
}

impl SMTPConfig {
    fn credentials(&self) -> Option<Credentials> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials::new(username.to_string(), password.to_string()))
            }
            _ => None,
        }
    }
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    ///
    /// # Errors
    /// - [`ConfigError::MissingField`] if the host is empty.
    /// - [`ConfigError::MissingCredentials`] if TLS is enabled without a username and password.
    pub fn new(config: SMTPConfig) -> Result<Self, ConfigError> {
        if config.host.trim().is_empty() {
            return Err(ConfigError::MissingField("SMTP_SERVER_ADDRESS"));
        }

        if config.enable_tls && config.credentials().is_none() {
            return Err(ConfigError::MissingCredentials);
        }

        if !config.enable_tls && config.credentials().is_some() {
            warn!("SMTP_ENABLE_TLS is off; the configured credentials will not be used");
        }

        Ok(Self { config })
    }

    /// The credentials presented to the server. Only ever set on a STARTTLS session.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.config.enable_tls {
            self.config.credentials()
        } else {
            None
        }
    }

    /// Builds a transport for a single, unpooled session
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .port(self.config.port);

        if self.config.enable_tls {
            let parameters = TlsParameters::builder(self.config.host.clone())
                .dangerous_accept_invalid_certs(!self.config.verify_tls)
                .build()?;

            builder = builder.tls(Tls::Required(parameters));
        }

        if let Some(credentials) = self.credentials() {
            builder = builder.credentials(credentials);
        }

        Ok(builder.build())
    }
}

fn mailbox(address: &EmailAddress) -> Result<Mailbox, MailerError> {
    address
        .as_str()
        .parse()
        .map_err(|err: AddressError| MailerError::InvalidEmail(format!("{address}: {err}")))
}

/// Composes the MIME message: a plain text part followed by the base64-encoded attachment.
///
/// `Cc` and `Bcc` headers are only written when the lists are non-empty. The envelope
/// covers `To`, `Cc` and `Bcc`.
pub fn compose(message: &OutboundMessage) -> Result<Message, MailerError> {
    let mut builder = Message::builder()
        .from(mailbox(&message.from)?)
        .to(mailbox(&message.to)?)
        .date_now()
        .subject(message.subject.clone());

    for cc in &message.cc {
        builder = builder.cc(mailbox(cc)?);
    }

    for bcc in &message.bcc {
        builder = builder.bcc(mailbox(bcc)?);
    }

    if !message.bcc.is_empty() {
        builder = builder.keep_bcc();
    }

    let content = Body::new_with_encoding(
        message.attachment.content.clone(),
        ContentTransferEncoding::Base64,
    )
    .map_err(|_| anyhow::anyhow!("attachment could not be base64 encoded"))?;

    let content_type = ContentType::parse("application/octet-stream")
        .map_err(|err| anyhow::anyhow!("invalid attachment content type: {err}"))?;

    let attachment =
        Attachment::new(message.attachment.filename.clone()).body(content, content_type);

    Ok(builder.multipart(
        MultiPart::mixed()
            .singlepart(SinglePart::plain(message.body.clone()))
            .singlepart(attachment),
    )?)
}

/// 535: credentials invalid, 534: mechanism too weak.
fn rejects_credentials(code: Option<Code>) -> bool {
    matches!(
        code.map(|code| code.to_string()).as_deref(),
        Some("535") | Some("534")
    )
}

impl From<smtp::Error> for MailerError {
    fn from(err: smtp::Error) -> Self {
        if rejects_credentials(err.status()) {
            debug!("smtp::Error -> MailerError::InvalidCredentials");

            MailerError::InvalidCredentials
        } else {
            MailerError::SendError(err.into())
        }
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), MailerError> {
        let email = compose(message)?;
        let transport = self.transport()?;

        debug!(
            "connecting to {}:{} (starttls: {})",
            self.config.host, self.config.port, self.config.enable_tls
        );

        let response = transport.send(email).await?;

        info!("server accepted the message with {}", response.code());

        Ok(())
    }
}
