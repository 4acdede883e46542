//! Email address validation helpers.
//!
//! Validation is deliberately permissive: a single `@` with a dotted
//! domain part. Deliverability is proven by the verification code flow,
//! not by the regex.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$")
        .expect("email regex must compile")
});

/// Check whether a string looks like a deliverable email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Normalize an email address for storage and lookup
///
/// Trims surrounding whitespace and lowercases the whole address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
