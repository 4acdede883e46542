//! MySQL repository implementations.

mod token_repository_impl;
mod user_repository_impl;
mod verification_code_repository_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use verification_code_repository_impl::MySqlVerificationCodeRepository;
