//! Email job type and queue trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single outbound email, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJob {
    /// Subject line
    pub subject: String,

    /// Plain text body (fallback for clients without HTML)
    pub plain_message: String,

    /// Sender address; `None` uses the configured default sender
    pub from_email: Option<String>,

    /// Recipient addresses
    pub recipient_list: Vec<String>,

    /// HTML body
    pub html_message: Option<String>,
}

impl EmailJob {
    /// Build a job for a single recipient using the default sender
    pub fn to_recipient(
        recipient: String,
        subject: String,
        plain_message: String,
        html_message: Option<String>,
    ) -> Self {
        Self {
            subject,
            plain_message,
            from_email: None,
            recipient_list: vec![recipient],
            html_message,
        }
    }
}

/// Queue trait for handing emails off to a background sender
///
/// `enqueue` returns as soon as the job is accepted. Delivery failures
/// are logged by the worker and never surfaced to the caller; a code
/// request must not fail because the mail server is slow.
#[async_trait]
pub trait EmailQueue: Send + Sync {
    /// Accept a job for asynchronous delivery
    async fn enqueue(&self, job: EmailJob) -> Result<(), DomainError>;
}
