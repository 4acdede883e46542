//! HTTP API layer for the Dog&Care backend.
//!
//! Exposes the email verification and token endpoints over actix-web.
//! All business logic lives in `dc_core`; this crate only translates
//! between HTTP and the domain services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
