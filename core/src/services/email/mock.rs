//! Mock email queue capturing jobs for assertions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::queue::{EmailJob, EmailQueue};

/// In-memory email queue for tests
#[derive(Clone)]
pub struct MockEmailQueue {
    jobs: Arc<RwLock<Vec<EmailJob>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockEmailQueue {
    /// Create a new mock queue
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            fail: Arc::new(RwLock::new(false)),
        }
    }

    /// All jobs enqueued so far, in order
    pub async fn sent(&self) -> Vec<EmailJob> {
        self.jobs.read().await.clone()
    }

    /// Number of jobs enqueued
    pub async fn sent_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Make subsequent enqueues fail, for error-path tests
    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }
}

impl Default for MockEmailQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailQueue for MockEmailQueue {
    async fn enqueue(&self, job: EmailJob) -> Result<(), DomainError> {
        if *self.fail.read().await {
            return Err(DomainError::Internal {
                message: "Email queue unavailable".to_string(),
            });
        }
        self.jobs.write().await.push(job);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_jobs_in_order() {
        let queue = MockEmailQueue::new();
        queue
            .enqueue(EmailJob::to_recipient(
                "a@example.com".to_string(),
                "first".to_string(),
                "body".to_string(),
                None,
            ))
            .await
            .unwrap();
        queue
            .enqueue(EmailJob::to_recipient(
                "b@example.com".to_string(),
                "second".to_string(),
                "body".to_string(),
                None,
            ))
            .await
            .unwrap();

        let sent = queue.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "first");
        assert_eq!(sent[1].recipient_list, vec!["b@example.com"]);
    }

    #[tokio::test]
    async fn test_fail_mode() {
        let queue = MockEmailQueue::new();
        queue.set_fail(true).await;

        let result = queue
            .enqueue(EmailJob::to_recipient(
                "a@example.com".to_string(),
                "subject".to_string(),
                "body".to_string(),
                None,
            ))
            .await;

        assert!(result.is_err());
        assert_eq!(queue.sent_count().await, 0);
    }
}
