//! Business logic services orchestrating the authentication flow.

pub mod auth;
pub mod email;
pub mod token;
pub mod verification;

pub use auth::{AuthService, AuthServiceConfig};
pub use email::{EmailJob, EmailQueue, MockEmailQueue};
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{EmailPurpose, VerificationService};
