//! Outbound mail — capability interface plus the SMTP implementation.
//!
//! The sender identity is fixed to the configured account; reports are
//! always dispatched as HTML.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// One outbound HTML email.
#[derive(Debug, Clone)]
pub struct MailEnvelope {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

/// Capability interface over the mail transport.
/// Implement this to swap transports without touching dispatch logic.
///
/// Carried in `AppState` as `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, envelope: MailEnvelope) -> Result<(), MailError>;
}

/// Production mailer over an authenticated SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(relay: &str, address: &str, password: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?
            .credentials(Credentials::new(address.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            from: address.parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, envelope: MailEnvelope) -> Result<(), MailError> {
        let MailEnvelope {
            to,
            subject,
            html_body,
        } = envelope;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);
        for recipient in &to {
            builder = builder.to(recipient.parse()?);
        }

        let message = builder.body(html_body)?;
        self.transport.send(message).await?;

        debug!("Email sent to {to:?}");
        Ok(())
    }
}
