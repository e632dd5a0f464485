//! User entity and creation payload.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A registered user, as served by `GET /users/`.
///
/// Users are immutable from the client's perspective once created; the id is
/// assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for `POST /users/`.
///
/// No client-side validation beyond field presence: a malformed email is
/// forwarded as-is and the remote store decides what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
