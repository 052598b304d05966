use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account that can author blog posts.
///
/// `password_hash` always holds the SHA-256 hex digest of the password,
/// never the plaintext. Users are created on signup and read on signin;
/// nothing in this service updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
        }
    }
}
