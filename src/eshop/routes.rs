// src/eshop/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the eshop router
pub fn eshop_routes() -> Router {
    Router::new()
        .route("/api/eshop/products", get(handlers::list_products))
        .route("/api/eshop/orders", post(handlers::create_order))
}
