//! Route definitions for the media collections.

use axum::routing::{get, post};
use axum::Router;
use mediahub_core::media::{Anime, Comic, MediaRecord, Movie, Novel};

use crate::handlers::media;
use crate::state::AppState;

/// Create + list routes for one media kind at `path`.
fn collection<T: MediaRecord>(path: &str) -> Router<AppState> {
    Router::new().route(
        path,
        get(media::list_media::<T>).post(media::create_media::<T>),
    )
}

/// Media routes mounted at `/api`.
///
/// ```text
/// GET|POST /novels          -> list_media / create_media
/// POST     /novels/sample   -> seed_sample_novel
/// GET|POST /comics          -> list_media / create_media
/// GET|POST /animes          -> list_media / create_media
/// GET|POST /movies          -> list_media / create_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(collection::<Novel>("/novels"))
        .route("/novels/sample", post(media::seed_sample_novel))
        .merge(collection::<Comic>("/comics"))
        .merge(collection::<Anime>("/animes"))
        .merge(collection::<Movie>("/movies"))
}
