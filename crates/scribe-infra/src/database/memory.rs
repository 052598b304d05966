//! In-memory repositories - used as fallback when no database is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Post, PostWithAuthor, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

/// Shared backing store for the in-memory repositories.
///
/// Users and posts live in one struct so the post repository can resolve
/// author names the way the SQL join does. Data is lost on process restart.
pub struct InMemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory user repository over the shared store.
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.store.users.write().await;

        // Same uniqueness rule the database enforces with its constraint.
        if users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint(
                "Email already registered".to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, RepoError> {
        let users = self.store.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email == email && u.password_hash == password_hash)
            .cloned())
    }
}

/// In-memory post repository over the shared store.
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPostRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.store.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_content(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<Option<Post>, RepoError> {
        let mut posts = self.store.posts.write().await;
        match posts.get_mut(&id) {
            Some(post) => {
                post.edit(title, content);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError> {
        let posts = self.store.posts.read().await;
        let Some(post) = posts.get(&id) else {
            return Ok(None);
        };

        let users = self.store.users.read().await;
        let author_name = users
            .get(&post.author_id)
            .map(|u| u.name.clone())
            .ok_or_else(|| RepoError::Constraint(format!("post {} has no author", post.id)))?;

        Ok(Some(PostWithAuthor {
            post: post.clone(),
            author_name,
        }))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.store.posts.read().await;
        Ok(posts.values().cloned().collect())
    }
}
