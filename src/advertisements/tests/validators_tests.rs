// src/advertisements/tests/validators_tests.rs

use crate::advertisements::models::*;
use crate::advertisements::validators::*;
use crate::common::Validator;

#[test]
fn test_extend_validator_valid_range() {
    let validator = ExtendAdvertisementValidator;

    for days in [1, 30, 90] {
        let result = validator.validate(&ExtendAdvertisementRequest { days });
        assert!(result.is_valid(), "{} days should be valid", days);
    }
}

#[test]
fn test_extend_validator_rejects_out_of_range() {
    let validator = ExtendAdvertisementValidator;

    for days in [0, 91, 365] {
        let result = validator.validate(&ExtendAdvertisementRequest { days });
        assert!(!result.is_valid(), "{} days should be invalid", days);
        assert!(result.errors.iter().any(|e| e.field == "days"));
    }
}

#[test]
fn test_list_validator_accepts_known_status() {
    let validator = ListAdvertisementsValidator;

    for status in STATUSES {
        let query = ListAdvertisementsQuery {
            page: Some(1),
            page_size: Some(20),
            status: Some(status.to_string()),
        };
        assert!(validator.validate(&query).is_valid());
    }
}

#[test]
fn test_list_validator_rejects_unknown_status() {
    let validator = ListAdvertisementsValidator;
    let query = ListAdvertisementsQuery {
        page: None,
        page_size: None,
        status: Some("archived".to_string()),
    };

    let result = validator.validate(&query);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.field == "status"));
}

#[test]
fn test_list_validator_rejects_bad_pagination() {
    let validator = ListAdvertisementsValidator;

    let query = ListAdvertisementsQuery {
        page: Some(0),
        page_size: None,
        status: None,
    };
    assert!(!validator.validate(&query).is_valid());

    let query = ListAdvertisementsQuery {
        page: None,
        page_size: Some(101),
        status: None,
    };
    assert!(!validator.validate(&query).is_valid());

    let query = ListAdvertisementsQuery {
        page: None,
        page_size: Some(0),
        status: None,
    };
    assert!(!validator.validate(&query).is_valid());
}
