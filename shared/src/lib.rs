//! Shared configuration, types, and utilities for the Dog&Care backend.

pub mod config;
pub mod utils;
