//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter};
use uuid::Uuid;

use scribe_core::domain::{Post, PostWithAuthor, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        tracing::debug!(user_email = %mask_email(&user.email), "Creating user");

        let model = user::ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("duplicate") || err_str.contains("unique") {
                    RepoError::Constraint("Email already registered".to_string())
                } else {
                    RepoError::Query(err_str)
                }
            })?;

        Ok(model.into())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Looking up user by credentials");

        // Email and hash are matched in one query; a wrong password behaves
        // exactly like an unknown email.
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::PasswordHash.eq(password_hash))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn update_content(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<Option<Post>, RepoError> {
        let Some(found) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut edited: Post = found.into();
        edited.edit(title, content);

        let model = post::ActiveModel::from(edited)
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(model.into()))
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<PostWithAuthor>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        match result {
            Some((model, Some(author))) => Ok(Some(PostWithAuthor {
                post: model.into(),
                author_name: author.name,
            })),
            // The FK makes an authorless post impossible; treat it as data
            // corruption rather than a missing post.
            Some((model, None)) => Err(RepoError::Constraint(format!(
                "post {} has no author row",
                model.id
            ))),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
