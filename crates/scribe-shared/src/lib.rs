//! # Scribe Shared
//!
//! Wire types shared between the server and any client: request bodies with
//! their validation rules, and response bodies matching the public JSON
//! surface.

pub mod dto;
pub mod response;

pub use response::{BlogResponse, MessageResponse};
