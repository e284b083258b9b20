//! API error types with IntoResponse
//!
//! Errors are converted to `{"detail": "..."}` bodies with the status the
//! underlying [`DbError`] variant calls for.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Database outcome: 400 duplicate, 404 missing, 500 otherwise
    Database(DbError),

    /// Request could not be extracted (bad JSON, bad path parameter)
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Database(DbError::DuplicateEmail) => StatusCode::BAD_REQUEST,
            Self::Database(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Database(e) => {
                if status.is_server_error() {
                    tracing::error!("Database error: {}", e);
                }
                e.to_string()
            }
            Self::Rejected { detail, .. } => detail,
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
