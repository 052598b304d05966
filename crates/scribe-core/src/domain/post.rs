use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post attributed to exactly one author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and timestamps.
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite title and content and refresh `updated_at`.
    ///
    /// The id, the author and `created_at` are never touched by an edit.
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Read model for the single-post view: the post joined with its author's
/// display name.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_name: String,
}
