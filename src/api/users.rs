//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::UserProfile;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Request body for POST /users
///
/// `username` becomes the user's login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for PUT /users/{login}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    debug!(username = ?request.username, "Creating user");

    let service_request = CreateUserRequest {
        username: request.username,
        password: request.password,
        name: request.name,
    };

    let user = state.user_service.create(service_request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    Ok(Json(users))
}

/// PUT /users/{login}
pub async fn update_user(
    State(state): State<AppState>,
    Path(login): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    debug!(login = %login, "Updating user");

    let user = state
        .user_service
        .update(&login, UpdateUserRequest { name: request.name })
        .await?;

    Ok(Json(user))
}

/// DELETE /users/{login}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(login = %login, "Deleting user");

    state.user_service.delete(&login).await?;

    Ok(StatusCode::NO_CONTENT)
}
