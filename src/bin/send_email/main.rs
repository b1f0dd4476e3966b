#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends the CI job's email and exits non-zero if it could not be delivered

use std::sync::Arc;

use anyhow::Result;
use ci_mailer::{
    domain::communication::dispatch::{DispatchService, SendMailRequest},
    infrastructure::email::{
        details::EmailDetails,
        smtp::{SMTPConfig, SMTPMailer},
    },
};
use clap::Parser;
use tracing::error;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP server configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The message to send
    #[clap(flatten)]
    pub email: EmailDetails,
}

#[mutants::skip]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let request = SendMailRequest::try_from(args.email)?;
    let mailer = SMTPMailer::new(args.smtp)?;

    let service = DispatchService::new(Arc::new(mailer));

    if let Err(e) = service.send_mail(request).await {
        error!("email was not sent: {}", e);

        return Err(e.into());
    }

    Ok(())
}
