//! Authentication and token configuration module

use serde::{Deserialize, Serialize};

/// Authentication configuration shared by the token and auth services
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing JWT access tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// Whether new accounts may be created through the code-request flow
    pub allow_registration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-change-in-production"),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
            allow_registration: true,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            access_token_expiry_minutes: std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_minutes),
            refresh_token_expiry_days: std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry_days),
            allow_registration: std::env::var("ALLOW_REGISTRATION")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.allow_registration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 15);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert!(config.allow_registration);
    }
}
