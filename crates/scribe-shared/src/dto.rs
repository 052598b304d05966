//! Data Transfer Objects - request/response types for the API.
//!
//! Request structs carry their validation rules as `validator` derives, so
//! the boundary check is an explicit `validate()` call returning the
//! field-level detail the 400 body surfaces verbatim. Unknown JSON fields
//! are accepted and ignored; missing required fields fail deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /user/signup`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Body of `POST /user/signin`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Body of `POST /blog/` and `PUT /blog/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogRequest {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 3, message = "content must be at least 3 characters"))]
    pub content: String,
}

/// Public projection of a user. The password hash has no field here, so it
/// can never leak into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A full post as returned by create, update and list routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author fragment embedded in the single-post projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
}

/// Projection returned by `GET /blog/{id}`: no post id, no raw author id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub title: String,
    pub content: String,
    pub author: PostAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
}

/// Body of a successful signin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}
