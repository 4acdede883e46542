//! SMTP delivery via lettre.

use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use dc_core::services::email::EmailJob;
use dc_shared::config::EmailConfig;

use crate::error::InfraError;

/// SMTP mailer delivering queued verification emails
pub struct SmtpMailer {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a mailer from SMTP configuration
    pub fn new(config: EmailConfig) -> Result<Self, InfraError> {
        let credentials =
            Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfraError::Config(format!("Failed to create SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { config, transport })
    }

    /// Deliver a single email job
    pub async fn send(&self, job: &EmailJob) -> Result<(), InfraError> {
        let from: Mailbox = job
            .from_email
            .clone()
            .unwrap_or_else(|| self.config.sender())
            .parse()
            .map_err(|e| InfraError::Config(format!("Invalid sender address: {}", e)))?;

        let mut builder = Message::builder().from(from).subject(job.subject.clone());
        for recipient in &job.recipient_list {
            let to: Mailbox = recipient
                .parse()
                .map_err(|e| InfraError::Email(format!("Invalid recipient: {}", e)))?;
            builder = builder.to(to);
        }

        let message = match &job.html_message {
            Some(html) => builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(job.plain_message.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| InfraError::Email(format!("Failed to build message: {}", e)))?,
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(job.plain_message.clone())
                .map_err(|e| InfraError::Email(format!("Failed to build message: {}", e)))?,
        };

        self.transport
            .send(message)
            .await
            .map_err(|e| InfraError::Email(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
