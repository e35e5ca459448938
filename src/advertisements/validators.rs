// src/advertisements/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Advertisement Validators
// ============================================================================

pub struct ExtendAdvertisementValidator;

impl Validator<ExtendAdvertisementRequest> for ExtendAdvertisementValidator {
    fn validate(&self, data: &ExtendAdvertisementRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.days == 0 || data.days > 90 {
            result.add_error("days", "Extension must be between 1 and 90 days");
        }

        result
    }
}

pub struct ListAdvertisementsValidator;

impl Validator<ListAdvertisementsQuery> for ListAdvertisementsValidator {
    fn validate(&self, data: &ListAdvertisementsQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(status) = &data.status {
            if !STATUSES.contains(&status.as_str()) {
                result.add_error("status", "Invalid advertisement status");
            }
        }

        if let Some(page) = data.page {
            if page == 0 {
                result.add_error("page", "Page numbering starts at 1");
            }
        }

        if let Some(page_size) = data.page_size {
            if page_size == 0 || page_size > 100 {
                result.add_error("page_size", "Page size must be between 1 and 100");
            }
        }

        result
    }
}
