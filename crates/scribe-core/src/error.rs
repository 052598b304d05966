//! Repository-level error types.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// Handlers collapse these to the route's generic failure response; the
/// variants exist so the cause can be logged before it is collapsed.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
