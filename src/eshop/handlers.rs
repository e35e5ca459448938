// src/eshop/handlers.rs
//! Marketplace handlers. Checkout is simulated: an order confirmation is
//! computed and returned, but nothing is stored.

use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use tracing::info;

use crate::common::error::ApiError;
use crate::common::id_generator::generate_order_id;
use crate::common::Validator;

use super::catalog::{all_products, find_product, products_in_category};
use super::models::*;
use super::validators::{CreateOrderValidator, ListProductsValidator};

/// List marketplace add-ons, optionally filtered by category
/// GET /api/eshop/products
pub async fn list_products(
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let validation = ListProductsValidator.validate(&query);
    if !validation.is_valid() {
        return Err(validation.into());
    }

    let products = match &query.category {
        Some(category) => products_in_category(category),
        None => all_products(),
    };

    let total = products.len();
    Ok(Json(ProductListResponse { products, total }))
}

/// Place an order for add-ons (simulated)
/// POST /api/eshop/orders
pub async fn create_order(
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    let validation = CreateOrderValidator.validate(&req);
    if !validation.is_valid() {
        return Err(validation.into());
    }

    // Validation guarantees every id resolves
    let items: Vec<OrderLine> = req
        .product_ids
        .iter()
        .filter_map(|id| find_product(id))
        .map(|product| OrderLine {
            product_id: product.id,
            name: product.name,
            price_czk: product.price_czk,
        })
        .collect();

    let total_czk = items.iter().map(|line| line.price_czk).sum();
    let order_id = generate_order_id();

    info!(order_id = %order_id, items = items.len(), total_czk, "Order placed");

    Ok(Json(OrderConfirmation {
        order_id,
        items,
        total_czk,
        created_at: Utc::now().to_rfc3339(),
    }))
}
