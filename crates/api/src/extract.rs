//! Request extractors that report failures as [`AppError`]s.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use mediahub_core::error::CoreError;
use mediahub_core::media::validate_record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then validated.
///
/// Malformed bodies and failing fields are both answered with a 422
/// `VALIDATION_ERROR`, so handlers only ever see valid records.
///
/// ```ignore
/// async fn create(ValidatedJson(novel): ValidatedJson<Novel>) -> AppResult<Json<()>> { .. }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Serialize + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        validate_record(&value)?;

        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::Core(CoreError::Validation(rejection.body_text()))
}

/// Query string extractor whose failures become `400 BAD_REQUEST` JSON errors.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
