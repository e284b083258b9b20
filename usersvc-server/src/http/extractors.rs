//! Custom Axum extractors
//!
//! Wrap the stock extractors so rejections use the same `{"detail": ...}`
//! body as every other error.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;

use super::error::ApiError;

/// JSON body extractor. Keeps axum's status (400 syntax, 415 content type,
/// 422 missing or mistyped fields).
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Extract an integer user id from the path
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: rejection.body_text(),
            })?;
        Ok(Self(id))
    }
}
