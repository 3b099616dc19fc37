//! Response body types for API handlers.
//!
//! The media endpoints answer with small fixed shapes (`{ "id" }`,
//! `{ "items" }`) rather than a generic envelope.

use serde::Serialize;

/// `{ "id": "..." }`, returned by every create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `{ "items": [...] }`, returned by every list endpoint.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}

/// `{ "message": "..." }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
