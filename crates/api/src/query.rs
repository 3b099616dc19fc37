//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?q=&limit=` parameters accepted by every media list endpoint.
///
/// `limit` is clamped by `MediaRepo::list`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}
