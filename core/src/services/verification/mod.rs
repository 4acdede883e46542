//! Email verification code issuance and checking.

mod service;
mod templates;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
pub use templates::{render_verification_email, strip_tags, EmailPurpose};
