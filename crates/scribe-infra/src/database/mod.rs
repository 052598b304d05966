//! Database connection management and repository implementations.

mod connections;
mod memory;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use memory::{InMemoryPostRepository, InMemoryStore, InMemoryUserRepository};
pub use postgres_repo::{PostgresPostRepository, PostgresUserRepository};
