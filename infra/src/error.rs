//! Infrastructure-level errors.

use thiserror::Error;

/// Errors raised while setting up or operating infrastructure services
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email delivery error: {0}")]
    Email(String),
}
