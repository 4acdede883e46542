//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Length of the opaque refresh token string handed to clients
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Service for issuing and verifying JWT access tokens and opaque
/// refresh tokens
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Create a new token service
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a fresh access/refresh token pair for a user
    ///
    /// The access token is a signed JWT carrying the user id and email
    /// verification status. The refresh token is a random opaque string;
    /// only its SHA-256 digest is persisted.
    pub async fn issue_tokens(&self, user: &User) -> DomainResult<TokenPair> {
        let claims = Claims::new_access_token(
            user.id,
            user.is_verified,
            self.config.access_token_expiry_minutes,
        );
        let access = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)?;

        let refresh = generate_refresh_token();
        let record = RefreshToken::new(
            user.id,
            hash_token(&refresh),
            self.config.refresh_token_expiry_days,
        );
        self.repository.save(record).await?;

        Ok(TokenPair::new(access, refresh))
    }

    /// Verify an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            let error = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) => {
                    TokenError::InvalidTokenFormat
                }
                _ => TokenError::InvalidClaims,
            };
            DomainError::Token(error)
        })?;

        Ok(data.claims)
    }

    /// Verify a refresh token against the store
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidRefreshToken` - Unknown token
    /// * `TokenError::TokenRevoked` - Token was revoked
    /// * `TokenError::RefreshTokenExpired` - Token past its window
    pub async fn verify_refresh_token(&self, token: &str) -> DomainResult<RefreshToken> {
        let record = self
            .repository
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if record.is_revoked {
            return Err(TokenError::TokenRevoked.into());
        }
        if record.is_expired() {
            return Err(TokenError::RefreshTokenExpired.into());
        }

        Ok(record)
    }

    /// Exchange a refresh token for a new pair, revoking the old token
    ///
    /// Rotation: the presented token is single-use. A second exchange of
    /// the same token fails with `TokenRevoked`.
    pub async fn rotate_refresh_token(&self, token: &str, user: &User) -> DomainResult<TokenPair> {
        let record = self.verify_refresh_token(token).await?;
        self.repository.revoke(record.id).await?;
        self.issue_tokens(user).await
    }

    /// Revoke a single refresh token by its opaque value
    pub async fn revoke_refresh_token(&self, token: &str) -> DomainResult<()> {
        let record = self.verify_refresh_token(token).await?;
        self.repository.revoke(record.id).await?;
        Ok(())
    }

    /// Revoke every active refresh token of a user
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> DomainResult<u64> {
        let revoked = self.repository.revoke_all_for_user(user_id).await?;
        tracing::info!(user_id = %user_id, revoked = revoked, "Revoked all refresh tokens");
        Ok(revoked)
    }
}

/// Generate a random alphanumeric refresh token
fn generate_refresh_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REFRESH_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// SHA-256 digest of a token, hex encoded
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
