pub mod password;

use crate::models::UserId;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use password::{hash_password, verify_password};

/// Payload for a new account signup.
///
/// Validation is presence-only: each field must be non-empty. There is no
/// email-format or password-strength rule here.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub email: String,
}

/// Payload for a login attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response to a successful login: an acknowledgment plus the account's
/// identifier, which the client passes as the task owner on later requests.
///
/// This is a bare identifier, not a session token. Nothing signs it and
/// nothing expires it; the API trusts the caller to supply it honestly.
/// That limitation is inherited from the original design and kept on
/// purpose rather than silently upgraded.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: UserId,
}
