//! Main verification service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::{VerificationCode, CODE_LENGTH};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::VerificationCodeRepository;
use crate::services::email::{EmailJob, EmailQueue};

use super::templates::{render_verification_email, EmailPurpose};

/// Verification service for issuing and checking email codes
pub struct VerificationService<C: VerificationCodeRepository, Q: EmailQueue> {
    /// Durable store of issued codes
    code_repository: Arc<C>,
    /// Queue for outbound verification emails
    email_queue: Arc<Q>,
}

impl<C: VerificationCodeRepository, Q: EmailQueue> VerificationService<C, Q> {
    /// Create a new verification service
    pub fn new(code_repository: Arc<C>, email_queue: Arc<Q>) -> Self {
        Self {
            code_repository,
            email_queue,
        }
    }

    /// Issue a fresh code for a user and queue the email carrying it
    ///
    /// This method:
    /// 1. Generates a new six-digit code and persists it
    /// 2. Renders the email for the given purpose
    /// 3. Enqueues the email for background delivery
    ///
    /// Outstanding codes for the same user are left untouched; several
    /// live codes may coexist and each remains independently usable.
    pub async fn issue_and_send(
        &self,
        user: &User,
        purpose: EmailPurpose,
    ) -> DomainResult<VerificationCode> {
        let record = self
            .code_repository
            .save(VerificationCode::new(user.id))
            .await?;

        let email = render_verification_email(&record.code, purpose);
        self.email_queue
            .enqueue(EmailJob::to_recipient(
                user.email.clone(),
                email.subject,
                email.plain_message,
                Some(email.html_message),
            ))
            .await?;

        tracing::info!(
            user_id = %user.id,
            code_id = %record.id,
            "Verification code issued"
        );

        Ok(record)
    }

    /// Check a submitted code for a user and consume it on success
    ///
    /// This method:
    /// 1. Looks up an unused record matching the exact code string
    /// 2. Rejects an expired match without mutating it, so the stored
    ///    row stays untouched for auditing
    /// 3. Consumes the record with a compare-and-set, so of any set of
    ///    concurrent submissions of the same code exactly one succeeds
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidVerificationCode` - No matching unused code,
    ///   or a concurrent check consumed it first
    /// * `AuthError::VerificationCodeExpired` - The matching code is
    ///   past its ten-minute window
    pub async fn check_code(&self, user_id: Uuid, code: &str) -> DomainResult<VerificationCode> {
        if code.len() != CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        let record = self
            .code_repository
            .find_valid(user_id, code)
            .await?
            .ok_or(AuthError::InvalidVerificationCode)?;

        if record.is_expired() {
            tracing::debug!(user_id = %user_id, code_id = %record.id, "Expired code submitted");
            return Err(AuthError::VerificationCodeExpired.into());
        }

        let consumed = self.code_repository.mark_used(record.id).await?;
        if !consumed {
            // Lost the race to a concurrent submission
            return Err(AuthError::InvalidVerificationCode.into());
        }

        Ok(record)
    }
}
