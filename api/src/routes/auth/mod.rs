//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Requesting and resending email verification codes
//! - Verifying codes and signing in
//! - Token refresh and logout
//! - Code-confirmed account deletion

pub mod delete_account;
pub mod logout;
pub mod refresh;
pub mod request_code;
pub mod resend_code;
pub mod verify_code;

use std::sync::Arc;

use dc_core::repositories::{TokenRepository, UserRepository, VerificationCodeRepository};
use dc_core::services::auth::AuthService;
use dc_core::services::email::EmailQueue;

/// Application state that holds shared services
pub struct AppState<U, C, Q, T>
where
    U: UserRepository,
    C: VerificationCodeRepository,
    Q: EmailQueue,
    T: TokenRepository,
{
    pub auth_service: Arc<AuthService<U, C, Q, T>>,
    /// Secret used by the JWT middleware guarding protected routes
    pub jwt_secret: String,
}
