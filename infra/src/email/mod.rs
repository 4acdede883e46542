//! Email delivery - SMTP transport and the background send queue.

pub mod queue;
pub mod smtp;

pub use queue::ChannelEmailQueue;
pub use smtp::SmtpMailer;
