//! Core business logic and domain layer for the Dog&Care backend.
//!
//! This crate holds the domain entities, repository traits, and the
//! services implementing the email verification and token issuance
//! flows. It performs no I/O of its own; persistence and mail delivery
//! are reached through the traits in [`repositories`] and
//! [`services::email`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
