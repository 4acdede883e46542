//! User entity representing a registered pet owner.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Accounts are created on the first code request for an unknown email
/// and stay unverified until a verification code for that address is
/// consumed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, normalized to lowercase
    pub email: String,

    /// Given name, may be empty until the profile is filled in
    pub first_name: String,

    /// Family name, may be empty until the profile is filled in
    pub last_name: String,

    /// Date of birth, optional profile field
    pub date_of_birth: Option<NaiveDate>,

    /// Free-form biography, optional profile field
    pub bio: Option<String>,

    /// Whether the email address has ever been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new unverified user for the given email address
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: None,
            bio: None,
            is_verified: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Marks the user's email address as verified
    ///
    /// This transition happens at most once over the account lifetime;
    /// calling it again is a no-op beyond bumping `updated_at`.
    pub fn confirm_email(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}
