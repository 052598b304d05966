//! Authentication ports.

use uuid::Uuid;

/// Claims carried by an auth token.
///
/// The token payload is just the user id; there is no expiry claim in this
/// design, so possession of a validly signed token is the whole credential.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
}

/// Token service trait for signing and verifying auth tokens.
pub trait TokenService: Send + Sync {
    /// Sign a token embedding the user id.
    fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Verify a token and decode its claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
///
/// The digest is deterministic: signin recomputes the hash of the supplied
/// password and looks the user up by it, so two calls with the same input
/// must produce the same output.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password to its stored representation.
    fn hash(&self, password: &str) -> String;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
