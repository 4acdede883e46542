//! Value objects crossing the service boundary.

pub mod auth_payload;

pub use auth_payload::{AuthPayload, PublicUser, RequestCodeOutcome, VerifyOutcome};
