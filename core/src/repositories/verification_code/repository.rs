//! Verification code repository trait: the durable store of issued codes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for the verification code store
///
/// Rows are insert-and-flag only: codes are never deleted, and the only
/// mutation is the one-way `is_used` transition. Multiple unexpired,
/// unused codes may coexist for the same user; no uniqueness is
/// enforced across outstanding codes.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Persist a freshly generated code record
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Find an unused record matching exactly this user and code string
    ///
    /// Expiry is not part of the lookup; callers check it on the
    /// returned record so an expired match can be reported distinctly
    /// from a missing one.
    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Atomically consume a code record
    ///
    /// Implemented as a compare-and-set on the used flag. Returns `true`
    /// when this call performed the transition, `false` when the record
    /// was already consumed (e.g. by a concurrent verification) or does
    /// not exist. Exactly one of any set of concurrent callers sees
    /// `true`.
    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError>;
}
