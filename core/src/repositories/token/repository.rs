//! Refresh token repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
///
/// Only the SHA-256 hash of a refresh token is ever stored; lookups go
/// through the hash as well, so a database dump never yields a usable
/// token.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a newly issued refresh token record
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look up a refresh token record by the hash of its opaque value
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a single refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Token was revoked by this call
    /// * `Ok(false)` - Token not found or already revoked
    async fn revoke(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Revoke every active refresh token belonging to a user
    ///
    /// Returns the number of tokens revoked. Used for logout-everywhere
    /// and account deletion.
    async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, DomainError>;
}
