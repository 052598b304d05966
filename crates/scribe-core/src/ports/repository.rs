use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostWithAuthor, User};
use crate::error::RepoError;

/// User persistence. Users are write-once: created on signup, looked up on
/// signin, never mutated.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. A duplicate email surfaces as
    /// [`RepoError::Constraint`].
    async fn create(&self, user: User) -> Result<User, RepoError>;

    /// Find the user whose stored email AND password hash both match.
    ///
    /// This is the signin lookup: the caller hashes the supplied password
    /// and the match happens in a single query, so a wrong password and an
    /// unknown email are indistinguishable (`None` either way).
    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, RepoError>;
}

/// Post persistence. Posts are never deleted in this service.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite title and content of the post with this id, refreshing
    /// `updated_at`. Returns `None` when no post matches the id.
    async fn update_content(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<Option<Post>, RepoError>;

    /// Fetch a post joined with its author's name, for the single-post view.
    async fn find_detail(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError>;

    /// Fetch every post, unfiltered and unpaginated.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
}
