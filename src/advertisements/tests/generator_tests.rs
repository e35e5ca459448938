// src/advertisements/tests/generator_tests.rs

use chrono::{DateTime, Utc};

use crate::advertisements::generator::{
    generate_advertisement, generate_advertisement_with_id, generate_advertisements, PORTALS,
};
use crate::advertisements::models::STATUSES;
use crate::suggestions::vocab::FIELDS;

#[test]
fn test_generator_honors_requested_count() {
    assert_eq!(generate_advertisements(0).len(), 0);
    assert_eq!(generate_advertisements(1).len(), 1);
    assert_eq!(generate_advertisements(50).len(), 50);
}

#[test]
fn test_generated_ids_carry_advertisement_prefix() {
    for ad in generate_advertisements(20) {
        assert!(ad.id.starts_with("A_"), "unexpected id {}", ad.id);
        assert_eq!(ad.id.len(), 8);
    }
}

#[test]
fn test_generated_values_stay_in_closed_sets() {
    for ad in generate_advertisements(50) {
        assert!(FIELDS.contains(&ad.field.as_str()), "unknown field {}", ad.field);
        assert!(
            STATUSES.contains(&ad.status.as_str()),
            "unknown status {}",
            ad.status
        );
        for portal in &ad.portals {
            assert!(PORTALS.contains(&portal.as_str()), "unknown portal {}", portal);
        }
    }
}

#[test]
fn test_salary_range_is_ordered() {
    for ad in generate_advertisements(50) {
        assert!(
            ad.salary_min <= ad.salary_max,
            "salary range inverted: {} > {}",
            ad.salary_min,
            ad.salary_max
        );
        assert!(ad.salary_min > 0);
    }
}

#[test]
fn test_timestamps_are_rfc3339_and_consistent() {
    for ad in generate_advertisements(50) {
        let created = DateTime::parse_from_rfc3339(&ad.created_at)
            .unwrap_or_else(|e| panic!("bad created_at {}: {}", ad.created_at, e));
        let expires = DateTime::parse_from_rfc3339(&ad.expires_at)
            .unwrap_or_else(|e| panic!("bad expires_at {}: {}", ad.expires_at, e));
        assert!(created < expires);

        if ad.status == "expired" {
            assert!(expires.with_timezone(&Utc) < Utc::now());
        }
    }
}

#[test]
fn test_drafts_have_no_traffic() {
    // Large enough batch to reliably include drafts
    for ad in generate_advertisements(200) {
        if ad.status == "draft" {
            assert!(ad.portals.is_empty());
            assert_eq!(ad.candidates_count, 0);
            assert_eq!(ad.views_count, 0);
        }
    }
}

#[test]
fn test_generated_id_can_be_injected() {
    let ad = generate_advertisement_with_id("A_K7NP3X".to_string());
    assert_eq!(ad.id, "A_K7NP3X");
}

#[test]
fn test_fresh_data_per_call() {
    // Two consecutive ads should differ in id; data is synthesized per call
    let first = generate_advertisement();
    let second = generate_advertisement();
    assert_ne!(first.id, second.id);
}
