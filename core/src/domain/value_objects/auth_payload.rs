//! Authentication payload value objects returned by the auth service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Public projection of a user, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub bio: Option<String>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            date_of_birth: user.date_of_birth,
            bio: user.bio.clone(),
        }
    }
}

/// Combined payload returned after successful verification:
/// public user fields plus a fresh token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: PublicUser,
    pub tokens: TokenPair,
}

/// Result of a successful verification call
///
/// `first_confirmation` distinguishes the first-ever confirmation of an
/// email (HTTP 201 at the edge) from a repeat login (HTTP 200).
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub payload: AuthPayload,
    pub first_confirmation: bool,
}

/// Result of a code request
///
/// `registered` is true when the account was created by this request or
/// is still awaiting its first confirmation (HTTP 201 at the edge).
#[derive(Debug, Clone, Copy)]
pub struct RequestCodeOutcome {
    pub registered: bool,
}
