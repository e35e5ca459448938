// src/suggestions/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Suggestion Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    /// Free-text job title. A missing value is treated the same as an empty
    /// one and rejected by the service.
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub from: i64,
    pub to: i64,
}

/// Suggestion returned to the posting form. Every enumerated value is
/// guaranteed to come from the closed vocabularies in `vocab`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionResult {
    pub field: String,
    pub professions: Vec<String>,
    pub description: String,
    pub salary: SalaryRange,
    pub education: String,
    pub benefits: Vec<String>,
}

/// Shape-checked but not yet vocabulary-checked provider output.
///
/// Salary amounts and sequence elements stay as raw JSON values here; the
/// repair pass owns coercion and filtering.
#[derive(Debug, Clone)]
pub struct RawSuggestion {
    pub field: String,
    pub professions: Vec<Value>,
    pub description: String,
    pub salary_from: Value,
    pub salary_to: Value,
    pub education: String,
    pub benefits: Vec<Value>,
}
