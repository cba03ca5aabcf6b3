//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the token endpoint and the two JSON:API collections
//! under a single Axum router. Every route is stateless apart from the
//! read-only catalog in `AppState`.

pub mod auth;
pub mod codes;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full gateway router: token issue, API collections, health check.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/token", post(auth::issue_token))
        .route("/api/codes", get(codes::list_codes))
        .route("/api/users", get(users::list_users))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
