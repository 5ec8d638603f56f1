use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for an account, assigned by the store.
///
/// Kept distinct from [`TaskId`](crate::models::TaskId) so that owner and
/// task identifiers cannot be swapped at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Mints a fresh identifier. Only the store should call this.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered user identity as held by the store.
///
/// The password is stored as a bcrypt hash and is never serialized; signup
/// acknowledges success without returning any credential material.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: UserId,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub email: String,
}
