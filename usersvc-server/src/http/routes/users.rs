//! User endpoints

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::db::{NewUser, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{UserId, ValidJson};
use crate::http::server::AppState;

/// Delete confirmation
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewUser>,
) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(state.gateway()).create(&req).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

/// GET /users - list all users by ascending id
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(state.gateway()).list().await?;
    Ok(Json(users))
}

/// DELETE /users/{user_id}
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<MessageResponse>, ApiError> {
    UserRepo::new(state.gateway()).delete(id).await?;
    tracing::info!(user_id = id, "user deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", delete(delete_user))
}

#[cfg(test)]
mod tests {
    // Database-backed tests: tests/users_api.rs
    // Run with: DATABASE_URL=... cargo test -p usersvc-server -- --ignored
}
