//! Handlers for the media collections (novels, comics, animes, movies).
//!
//! Create and list are generic over [`MediaRecord`]; the router instantiates
//! them once per kind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mediahub_core::media::{sample_novel, MediaRecord, Novel, Persisted, SAMPLE_NOVEL_TITLE};
use mediahub_db::repositories::MediaRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{ApiQuery, ValidatedJson};
use crate::query::ListParams;
use crate::response::{CreatedResponse, ItemsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

/// POST /api/{kind}s
///
/// Validate and store a record. Responds `201` with the new identifier.
pub async fn create_media<T: MediaRecord>(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<T>,
) -> AppResult<impl IntoResponse> {
    let id = MediaRepo::create(state.store.as_ref(), &record).await?;

    tracing::info!(collection = T::KIND.collection(), id = %id, "Media record created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/{kind}s?q=&limit=
///
/// List records in insertion order, optionally filtered by a free-text
/// term matched against title, author, studio, director, and tags.
pub async fn list_media<T: MediaRecord>(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Json<ItemsResponse<Persisted<T>>>> {
    let items = MediaRepo::list::<T>(state.store.as_ref(), params.q.as_deref(), params.limit).await?;

    Ok(Json(ItemsResponse { items }))
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Outcome of the sample seeding endpoint.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/novels/sample
///
/// Insert the sample novel unless a novel with the same title exists.
pub async fn seed_sample_novel(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let store = state.store.as_ref();

    if MediaRepo::find_by_title::<Novel>(store, SAMPLE_NOVEL_TITLE)
        .await?
        .is_some()
    {
        return Ok(Json(SeedResponse {
            status: "exists",
            id: None,
            message: Some("Sample novel already present"),
        }));
    }

    let id = MediaRepo::create(store, &sample_novel()).await?;
    tracing::info!(id = %id, "Sample novel seeded");

    Ok(Json(SeedResponse {
        status: "created",
        id: Some(id),
        message: None,
    }))
}
