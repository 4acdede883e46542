//! Shared handler helpers.

pub mod error;
