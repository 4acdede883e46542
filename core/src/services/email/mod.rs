//! Email delivery abstraction.
//!
//! The core layer only enqueues; actual SMTP delivery happens in the
//! infrastructure layer on a background worker, so request handlers
//! never block on the mail server.

mod mock;
mod queue;

pub use mock::MockEmailQueue;
pub use queue::{EmailJob, EmailQueue};
