use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("missing mail config: {0}")]
    MissingConfig(String),
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// One outbound notification email. The sender address is owned by the
/// transport configuration, not the caller.
#[derive(Debug)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Abstraction over the mail provider so handlers can be exercised
/// without a live SMTP connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Gmail relay authenticated with the EMAIL_USER / EMAIL_PASS
    /// mailbox credentials. EMAIL_USER doubles as the sender address.
    pub fn from_env() -> Result<Self, MailerError> {
        let user = std::env::var("EMAIL_USER")
            .map_err(|_| MailerError::MissingConfig("EMAIL_USER".into()))?;
        let pass = std::env::var("EMAIL_PASS")
            .map_err(|_| MailerError::MissingConfig("EMAIL_PASS".into()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay("smtp.gmail.com")
            .map_err(|e| MailerError::Smtp(e.to_string()))?
            .credentials(Credentials::new(user.clone(), pass))
            .build();

        Ok(Self { transport, from: user })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| MailerError::InvalidAddress(e.to_string()))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e: lettre::address::AddressError| MailerError::InvalidAddress(e.to_string()))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body)
            .map_err(|e| MailerError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::Smtp(e.to_string()))?;

        Ok(())
    }
}
