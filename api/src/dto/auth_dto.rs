//! Authentication request and response bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use dc_core::domain::value_objects::AuthPayload;

/// Body for POST /api/v1/auth and /api/v1/auth/resend-code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
}

/// Body for POST /api/v1/auth/verify
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be exactly 6 digits"))]
    pub code: String,
}

/// Body for POST /api/v1/auth/refresh
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

/// Body for POST /api/v1/auth/logout
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,

    /// Revoke every session of the user instead of just this one
    #[serde(default)]
    pub all_tokens: bool,
}

/// Body for POST /api/v1/auth/confirm-deletion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmDeletionRequest {
    #[validate(length(equal = 6, message = "Code must be exactly 6 digits"))]
    pub code: String,
}

/// Simple acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Token pair returned by verify and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

/// Public user fields returned after verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub bio: Option<String>,
}

/// Full response for a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUserResponse {
    pub user: UserResponse,
    pub tokens: TokenPairResponse,
}

impl From<AuthPayload> for AuthUserResponse {
    fn from(payload: AuthPayload) -> Self {
        Self {
            user: UserResponse {
                email: payload.user.email,
                first_name: payload.user.first_name,
                last_name: payload.user.last_name,
                date_of_birth: payload.user.date_of_birth,
                bio: payload.user.bio,
            },
            tokens: TokenPairResponse {
                access: payload.tokens.access,
                refresh: payload.tokens.refresh,
            },
        }
    }
}
