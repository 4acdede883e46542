//! Configuration modules for the Dog&Care backend.
//!
//! All configuration is environment-driven with sensible development
//! defaults. Each section has a `from_env` constructor.

mod auth;
mod database;
mod email;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}
