//! Database version probe

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::MetaRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /db/version
async fn db_version(State(state): State<AppState>) -> Result<Json<VersionResponse>, ApiError> {
    let version = MetaRepo::new(state.gateway()).server_version().await?;
    Ok(Json(VersionResponse { version }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/db/version", get(db_version))
}
