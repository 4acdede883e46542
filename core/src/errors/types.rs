//! Error type definitions for authentication and token management.
//! HTTP status mapping lives in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email format: {email}")]
    InvalidEmailFormat { email: String },

    #[error("Invalid confirmation code")]
    InvalidVerificationCode,

    #[error("The confirmation code has expired")]
    VerificationCodeExpired,

    #[error("User not found")]
    UserNotFound,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        let error = AuthError::InvalidEmailFormat {
            email: "broken".to_string(),
        };
        assert!(error.to_string().contains("broken"));

        assert_eq!(
            AuthError::VerificationCodeExpired.to_string(),
            "The confirmation code has expired"
        );
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::TokenRevoked.to_string(), "Token revoked");
        assert_eq!(
            TokenError::InvalidRefreshToken.to_string(),
            "Invalid refresh token"
        );
    }
}
