// src/advertisements/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the advertisements router
pub fn advertisements_routes() -> Router {
    Router::new()
        // NOTE: Specific routes must come BEFORE parameterized routes (:id)
        .route(
            "/api/advertisements/stats",
            get(handlers::get_advertisement_stats),
        )
        .route("/api/advertisements", get(handlers::list_advertisements))
        .route(
            "/api/advertisements/:id/extend",
            post(handlers::extend_advertisement),
        )
        .route(
            "/api/advertisements/:id/republish",
            post(handlers::republish_advertisement),
        )
        .route(
            "/api/advertisements/:id/cancel",
            post(handlers::cancel_advertisement),
        )
}
