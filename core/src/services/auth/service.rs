//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use dc_shared::utils::validation::{is_valid_email, normalize_email};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthPayload, PublicUser, RequestCodeOutcome, VerifyOutcome};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use crate::services::email::EmailQueue;
use crate::services::token::TokenService;
use crate::services::verification::{EmailPurpose, VerificationService};

use super::config::AuthServiceConfig;

/// Authentication service for managing the complete authentication flow
pub struct AuthService<U, C, Q, T>
where
    U: UserRepository,
    C: VerificationCodeRepository,
    Q: EmailQueue,
    T: TokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Verification service for email code handling
    verification_service: Arc<VerificationService<C, Q>>,
    /// Token service for JWT and refresh token management
    token_service: Arc<TokenService<T>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, C, Q, T> AuthService<U, C, Q, T>
where
    U: UserRepository,
    C: VerificationCodeRepository,
    Q: EmailQueue,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<C, Q>>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            token_service,
            config,
        }
    }

    /// Request a verification code for an email, registering the account
    /// if it does not exist yet
    ///
    /// This method:
    /// 1. Validates and normalizes the email address
    /// 2. Creates the account when the email is unknown (unless
    ///    registration is disabled)
    /// 3. Issues a fresh code and queues the email carrying it
    ///
    /// # Returns
    ///
    /// * `Ok(RequestCodeOutcome)` - `registered` is true when the
    ///   account was created by this call or still awaits its first
    ///   confirmation
    /// * `Err(DomainError)` - Invalid email, registration disabled, or a
    ///   persistence failure
    pub async fn request_code(&self, email: &str) -> DomainResult<RequestCodeOutcome> {
        let email = self.normalize_and_validate(email)?;

        match self.user_repository.find_by_email(&email).await? {
            Some(user) => {
                let purpose = if user.is_verified {
                    EmailPurpose::Login
                } else {
                    EmailPurpose::Registration
                };
                self.verification_service
                    .issue_and_send(&user, purpose)
                    .await?;
                Ok(RequestCodeOutcome {
                    registered: !user.is_verified,
                })
            }
            None => {
                if !self.config.allow_registration {
                    return Err(AuthError::RegistrationDisabled.into());
                }

                let user = self.user_repository.create(User::new(email)).await?;
                tracing::info!(user_id = %user.id, "New account registered");

                self.verification_service
                    .issue_and_send(&user, EmailPurpose::Registration)
                    .await?;
                Ok(RequestCodeOutcome { registered: true })
            }
        }
    }

    /// Resend a verification code to an existing account
    ///
    /// Unlike `request_code` this never creates an account; an unknown
    /// email is an error.
    pub async fn resend_code(&self, email: &str) -> DomainResult<()> {
        let email = self.normalize_and_validate(email)?;

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let purpose = if user.is_verified {
            EmailPurpose::Login
        } else {
            EmailPurpose::Registration
        };
        self.verification_service
            .issue_and_send(&user, purpose)
            .await?;
        Ok(())
    }

    /// Verify a submitted code and sign the user in
    ///
    /// This method:
    /// 1. Resolves the account by email
    /// 2. Checks and consumes the code
    /// 3. Confirms the email on the first successful verification
    /// 4. Issues an access/refresh token pair
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOutcome)` - Public user fields plus fresh tokens;
    ///   `first_confirmation` marks the first-ever confirmation
    /// * `Err(DomainError)` - Unknown email, wrong or expired code
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyOutcome> {
        let email = self.normalize_and_validate(email)?;

        let mut user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.verification_service.check_code(user.id, code).await?;

        let first_confirmation = !user.is_verified;
        if first_confirmation {
            user.confirm_email();
            tracing::info!(user_id = %user.id, "Email confirmed");
        }
        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        let tokens = self.token_service.issue_tokens(&user).await?;

        Ok(VerifyOutcome {
            payload: AuthPayload {
                user: PublicUser::from(&user),
                tokens,
            },
            first_confirmation,
        })
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The presented token is revoked as part of the exchange.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let record = self
            .token_service
            .verify_refresh_token(refresh_token)
            .await?;

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.token_service
            .rotate_refresh_token(refresh_token, &user)
            .await
    }

    /// Log out by revoking the presented refresh token
    ///
    /// With `all_devices` set, every active refresh token of the owning
    /// user is revoked instead of just the presented one.
    pub async fn logout(&self, refresh_token: &str, all_devices: bool) -> DomainResult<()> {
        if all_devices {
            let record = self
                .token_service
                .verify_refresh_token(refresh_token)
                .await?;
            self.token_service
                .revoke_all_for_user(record.user_id)
                .await?;
        } else {
            self.token_service
                .revoke_refresh_token(refresh_token)
                .await?;
        }
        Ok(())
    }

    /// Send an account deletion confirmation code to a signed-in user
    pub async fn request_account_deletion(&self, user_id: Uuid) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.verification_service
            .issue_and_send(&user, EmailPurpose::AccountDeletion)
            .await?;
        Ok(())
    }

    /// Confirm account deletion with a code and remove the account
    ///
    /// This method:
    /// 1. Checks and consumes the deletion code
    /// 2. Revokes every refresh token of the user
    /// 3. Deletes the account
    ///
    /// Issued code records are kept for auditing even after the account
    /// is gone.
    pub async fn confirm_account_deletion(&self, user_id: Uuid, code: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.verification_service.check_code(user.id, code).await?;
        self.token_service.revoke_all_for_user(user.id).await?;
        self.user_repository.delete(user.id).await?;

        tracing::info!(user_id = %user.id, "Account deleted");
        Ok(())
    }

    fn normalize_and_validate(&self, email: &str) -> DomainResult<String> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmailFormat { email }.into());
        }
        Ok(email)
    }
}
