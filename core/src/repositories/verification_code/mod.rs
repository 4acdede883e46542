//! Verification code store abstraction.

mod mock;
mod repository;

pub use mock::MockVerificationCodeRepository;
pub use repository::VerificationCodeRepository;
