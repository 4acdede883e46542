//! Repository traits defining the persistence boundary.
//!
//! Concrete implementations live in the infrastructure layer; the mocks
//! here back the service tests and the API integration tests.

pub mod token;
pub mod user;
pub mod verification_code;

pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification_code::{MockVerificationCodeRepository, VerificationCodeRepository};
