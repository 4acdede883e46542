//! Authentication service module
//!
//! This module provides the complete passwordless authentication flow:
//! - Email verification code request and resend
//! - Code verification with account confirmation on first success
//! - Token issuance, refresh and revocation
//! - Code-confirmed account deletion

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
