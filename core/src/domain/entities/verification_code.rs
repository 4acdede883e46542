//! Verification code entity for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Expiration window for verification codes (10 minutes)
pub const CODE_EXPIRATION_MINUTES: i64 = 10;

/// One-time code mailed to a user to prove control of their address
///
/// Records are never deleted; a consumed code keeps its row with
/// `is_used = true` for audit purposes. Expiry is a pure function of
/// `created_at`, so no separate expiration column is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the code record
    pub id: Uuid,

    /// User this code was issued to
    pub user_id: Uuid,

    /// The 6-digit code, left-zero-padded decimal string
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Whether the code has been successfully consumed
    pub is_used: bool,
}

impl VerificationCode {
    /// Creates a new verification code for a user with a random 6-digit code
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            code: Self::generate_code(),
            created_at: Utc::now(),
            is_used: false,
        }
    }

    /// Generates a random 6-digit code in the range "000000"-"999999"
    ///
    /// Leading zeros are preserved; no uniqueness is enforced against
    /// other outstanding codes.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the code has passed its 10-minute expiration window
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.created_at + Duration::minutes(CODE_EXPIRATION_MINUTES)
    }

    /// Checks if the code can still be consumed
    ///
    /// Validity is solely a function of the used flag; expiry is checked
    /// separately via [`is_expired`](Self::is_expired).
    pub fn is_valid(&self) -> bool {
        !self.is_used
    }

    /// Compares an input code against this record in constant time
    pub fn matches(&self, input_code: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Marks the code as used
    ///
    /// Idempotent: marking an already-used code leaves it used.
    pub fn mark_as_used(&mut self) {
        self.is_used = true;
    }
}
