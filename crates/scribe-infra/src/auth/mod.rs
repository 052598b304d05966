//! Authentication implementations.

mod jwt;
mod password;

pub use jwt::JwtTokenService;
pub use password::Sha256PasswordHasher;
