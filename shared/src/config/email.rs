//! Email delivery (SMTP) configuration module

use serde::{Deserialize, Serialize};

/// SMTP configuration for outgoing verification emails
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username
    pub smtp_user: String,

    /// SMTP password
    pub smtp_password: String,

    /// Default sender address, used when a job carries no explicit sender
    pub from_email: String,

    /// Display name for the default sender
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_email: String::from("noreply@dogandcare.app"),
            from_name: String::from("Dog&Care"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_user: std::env::var("SMTP_USER").unwrap_or(defaults.smtp_user),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.smtp_password),
            from_email: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_email),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
        }
    }

    /// Full sender mailbox, e.g. `Dog&Care <noreply@dogandcare.app>`
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_format() {
        let config = EmailConfig::default();
        assert_eq!(config.sender(), "Dog&Care <noreply@dogandcare.app>");
    }
}
