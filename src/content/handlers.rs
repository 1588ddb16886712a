use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    content::{
        dto::{GenerateContentRequest, GenerateContentResponse},
        repo_types::ContentRequest,
        services,
    },
    error::{AppError, FieldError},
    state::AppState,
};

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-content", post(generate_content))
        .route("/content-history", get(content_history))
}

#[instrument(skip(state, claims, body), fields(user_id = %claims.sub))]
pub async fn generate_content(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let Json(body) = body.map_err(|e| {
        warn!(error = %e, "unreadable request body");
        AppError::Validation(vec![FieldError {
            path: vec![],
            message: e.body_text(),
        }])
    })?;

    let req = GenerateContentRequest::from_json(&body).map_err(|errors| {
        warn!(violations = errors.len(), "invalid generate-content request");
        AppError::Validation(errors)
    })?;

    let res = services::generate_content(
        state.generator.as_ref(),
        state.repo.as_ref(),
        &claims.to_upsert(),
        req,
    )
    .await?;
    Ok(Json(res))
}

#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn content_history(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<ContentRequest>>, AppError> {
    let rows = state
        .repo
        .list_content_requests_by_user(&claims.sub)
        .await
        .map_err(|e| AppError::persistence("Failed to fetch content history", e))?;
    Ok(Json(rows))
}
