//! Router assembly

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers::auth_priority::{get_auth_priority, patch_auth_priority};
use crate::state::AppState;

/// Path of the auth priority endpoints
pub const AUTH_PRIORITY_PATH: &str = "/v0/management/auth-priority";

/// Build the management router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            AUTH_PRIORITY_PATH,
            get(get_auth_priority).patch(patch_auth_priority),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
