//! # Infrastructure Layer
//!
//! Concrete implementations behind the traits declared in `dc_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: SMTP delivery via lettre, fed by a channel-backed queue

pub mod database;
pub mod email;
pub mod error;

pub use error::InfraError;
