// src/suggestions/repair.rs
//! Vocabulary repair pass.
//!
//! Forces every enumerated value of a shape-checked suggestion into its
//! closed vocabulary. Single-value fields are replaced with a fixed default
//! when invalid (the form needs exactly one value); sequence fields are
//! filtered and may end up empty. Violations are repaired silently, never
//! surfaced as errors.

use serde_json::Value;

use super::models::{RawSuggestion, SalaryRange, SuggestionResult};
use super::vocab::{is_benefit, is_education_level, is_field, is_profession};
use super::vocab::{DEFAULT_EDUCATION, DEFAULT_FIELD};

/// Pure function: shape-checked provider output in, trustworthy result out.
pub fn repair(raw: RawSuggestion) -> SuggestionResult {
    let field = if is_field(&raw.field) {
        raw.field
    } else {
        DEFAULT_FIELD.to_string()
    };

    let professions = filter_by_vocabulary(raw.professions, is_profession);

    let salary = coerce_salary(&raw.salary_from, &raw.salary_to);

    let education = if is_education_level(&raw.education) {
        raw.education
    } else {
        DEFAULT_EDUCATION.to_string()
    };

    let benefits = filter_by_vocabulary(raw.benefits, is_benefit);

    SuggestionResult {
        field,
        professions,
        description: raw.description,
        salary,
        education,
        benefits,
    }
}

/// Keep only members of the vocabulary, order preserved. Non-string
/// elements fail membership and are dropped like any other invalid entry.
fn filter_by_vocabulary(values: Vec<Value>, is_member: fn(&str) -> bool) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| match value.as_str() {
            Some(s) if is_member(s) => Some(s.to_string()),
            _ => None,
        })
        .collect()
}

/// Coerce salary bounds to integers. Coercion is coupled: when either bound
/// fails to parse, both collapse to 0.
fn coerce_salary(from: &Value, to: &Value) -> SalaryRange {
    match (coerce_amount(from), coerce_amount(to)) {
        (Some(from), Some(to)) => SalaryRange { from, to },
        _ => SalaryRange { from: 0, to: 0 },
    }
}

fn coerce_amount(value: &Value) -> Option<i64> {
    if let Some(amount) = value.as_i64() {
        return Some(amount);
    }
    if let Some(amount) = value.as_f64() {
        return Some(amount as i64);
    }
    value.as_str().and_then(|s| s.trim().parse::<i64>().ok())
}
