//! Domain entities for the Dog&Care authentication flow.

pub mod token;
pub mod user;
pub mod verification_code;

pub use token::{Claims, RefreshToken, TokenPair};
pub use user::User;
pub use verification_code::VerificationCode;
