// src/eshop/validators.rs

use super::catalog::find_product;
use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Eshop Validators
// ============================================================================

pub struct CreateOrderValidator;

impl Validator<CreateOrderRequest> for CreateOrderValidator {
    fn validate(&self, data: &CreateOrderRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.product_ids.is_empty() {
            result.add_error("product_ids", "At least one product is required");
        } else if data.product_ids.len() > 50 {
            result.add_error("product_ids", "Cannot order more than 50 items at once");
        } else {
            for (index, product_id) in data.product_ids.iter().enumerate() {
                if find_product(product_id).is_none() {
                    result.add_error(
                        &format!("product_ids[{}]", index),
                        "Unknown product",
                    );
                }
            }
        }

        result
    }
}

pub struct ListProductsValidator;

impl Validator<ListProductsQuery> for ListProductsValidator {
    fn validate(&self, data: &ListProductsQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(category) = &data.category {
            if !CATEGORIES.contains(&category.as_str()) {
                result.add_error("category", "Unknown product category");
            }
        }

        result
    }
}
