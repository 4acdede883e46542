//! Channel-backed email queue with a background delivery worker.

use async_trait::async_trait;
use tokio::sync::mpsc;

use dc_core::errors::DomainError;
use dc_core::services::email::{EmailJob, EmailQueue};

use super::smtp::SmtpMailer;

/// Number of jobs the queue buffers before `enqueue` applies backpressure
const QUEUE_CAPACITY: usize = 256;

/// Email queue handing jobs to a background SMTP worker
///
/// Enqueuing returns as soon as the job enters the channel. The worker
/// logs delivery failures instead of surfacing them; a code request must
/// not fail because the mail relay is down.
#[derive(Clone)]
pub struct ChannelEmailQueue {
    sender: mpsc::Sender<EmailJob>,
}

impl ChannelEmailQueue {
    /// Start the delivery worker and return the queue handle
    pub fn start(mailer: SmtpMailer) -> Self {
        let (sender, mut receiver) = mpsc::channel::<EmailJob>(QUEUE_CAPACITY);

        tokio::spawn(async move {
            while let Some(job) = receiver.recv().await {
                let recipients = job.recipient_list.join(", ");
                match mailer.send(&job).await {
                    Ok(()) => {
                        tracing::info!(recipients = %recipients, "Email delivered");
                    }
                    Err(e) => {
                        tracing::error!(
                            recipients = %recipients,
                            error = %e,
                            "Email delivery failed"
                        );
                    }
                }
            }
            tracing::info!("Email worker stopped");
        });

        Self { sender }
    }
}

#[async_trait]
impl EmailQueue for ChannelEmailQueue {
    async fn enqueue(&self, job: EmailJob) -> Result<(), DomainError> {
        self.sender
            .send(job)
            .await
            .map_err(|_| DomainError::Internal {
                message: "Email queue is closed".to_string(),
            })
    }
}
