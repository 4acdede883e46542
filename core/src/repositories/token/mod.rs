//! Refresh token store abstraction.

mod mock;
mod repository;

pub use mock::MockTokenRepository;
pub use repository::TokenRepository;
