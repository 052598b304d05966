//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! SeaORM-backed Postgres repositories (with an in-memory fallback for
//! running without a database), the JWT token service and the SHA-256
//! password hasher.

pub mod auth;
pub mod database;

pub use auth::{JwtTokenService, Sha256PasswordHasher};
pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryStore, InMemoryUserRepository};
