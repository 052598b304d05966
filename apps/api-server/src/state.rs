//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PostRepository, UserRepository};
use scribe_infra::database::{
    DatabaseConfig, InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
    PostgresPostRepository, PostgresUserRepository, connect,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// With a database configured, both repositories share one pooled
    /// connection. Without one (or when connecting fails), storage degrades
    /// to the in-memory repositories so the server still answers requests.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let state = match db_config {
            Some(config) => match connect(config).await {
                Ok(conn) => Self {
                    users: Arc::new(PostgresUserRepository::new(conn.clone())),
                    posts: Arc::new(PostgresPostRepository::new(conn)),
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by process-local storage. Both repositories share one
    /// store so posts can resolve their authors.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            users: Arc::new(InMemoryUserRepository::new(store.clone())),
            posts: Arc::new(InMemoryPostRepository::new(store)),
        }
    }
}
