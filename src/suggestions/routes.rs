// src/suggestions/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the suggestions router
pub fn suggestions_routes() -> Router {
    Router::new().route(
        "/api/suggestions",
        post(handlers::suggest_position_metadata),
    )
}
