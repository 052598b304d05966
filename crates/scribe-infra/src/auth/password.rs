//! SHA-256 password hashing implementation.

use sha2::{Digest, Sha256};

use scribe_core::ports::PasswordHasher;

/// Unsalted SHA-256 password hasher.
///
/// Signin recomputes the digest of the supplied password and looks the user
/// up by it, which requires the hash to be deterministic. The flip side is
/// that identical passwords across users produce identical hashes - a known
/// weakness of this scheme, kept as specified rather than silently upgraded
/// to a salted KDF.
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    /// Digest the UTF-8 bytes of the password to lowercase hex.
    fn hash(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}
