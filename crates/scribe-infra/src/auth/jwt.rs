//! JWT token service implementation.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scribe_core::ports::{AuthError, TokenClaims, TokenService};

/// Wire-level JWT claims. The payload is the user id and nothing else; in
/// particular no `exp` claim is issued, so validation must not demand one.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
}

/// HS256 token service sharing one symmetric secret between issuance and
/// verification.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        // Warn if using default secret in production
        if secret == "change-me-in-production" {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        Self::new(&secret)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no expiry; the default validation would reject every
        // one of them for the missing `exp` claim.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let claims = Claims {
            id: user_id.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user_id = Uuid::parse_str(&token_data.claims.id)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims { user_id })
    }
}
