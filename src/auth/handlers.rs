use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{extractors::AuthUser, repo_types::User},
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/auth/user", get(get_user))
}

/// Login callback: records the identity provider's profile for this subject.
#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn login(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = state
        .repo
        .upsert_user(&claims.to_upsert())
        .await
        .map_err(|e| AppError::persistence("Failed to save user", e))?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(user))
}

#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = state
        .repo
        .get_user(&claims.sub)
        .await
        .map_err(|e| AppError::persistence("Failed to fetch user", e))?
        .ok_or(AppError::NotFound("User not found"))?;

    Ok(Json(user))
}
