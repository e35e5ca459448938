// src/eshop/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Eshop Models
// ============================================================================

/// Add-on categories shown as marketplace sections
pub const CATEGORIES: [&str; 4] = ["credits", "extensions", "branding", "sourcing"];

#[derive(Debug, Clone, Serialize)]
pub struct AddonProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_czk: i64,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<AddonProduct>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub product_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub price_czk: i64,
}

/// Simulated order confirmation; nothing is stored anywhere
#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub items: Vec<OrderLine>,
    pub total_czk: i64,
    pub created_at: String,
}
