//! Response envelopes shared by every route.

use serde::{Deserialize, Serialize};

/// Plain `{message}` document.
///
/// Used for every error body except validation failures (which serialize
/// the field-level detail instead) - the client only ever sees the route's
/// generic message, never the underlying cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, blog}` envelope wrapping blog payloads.
///
/// `blog` is a single post, a post projection, or a list, depending on the
/// route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse<T> {
    pub message: String,
    pub blog: T,
}

impl<T> BlogResponse<T> {
    pub fn new(message: impl Into<String>, blog: T) -> Self {
        Self {
            message: message.into(),
            blog,
        }
    }
}
