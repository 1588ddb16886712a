use crate::state::AppState;
use axum::Router;

pub mod claims;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;
pub(crate) mod extractors;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
