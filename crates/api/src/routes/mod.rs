pub mod health;
pub mod media;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /novels                                          list, create
/// /novels/sample                                   seed sample novel (POST)
/// /comics                                          list, create
/// /animes                                          list, create
/// /movies                                          list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(media::router())
}
