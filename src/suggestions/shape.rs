// src/suggestions/shape.rs
//! Explicit shape check for parsed provider output.
//!
//! The provider payload is untrusted: presence and basic type of every key
//! is verified here before the repair pass runs. Vocabulary membership is
//! deliberately not checked at this stage.

use serde_json::Value;

use super::models::RawSuggestion;

/// Verify the seven required fields and their basic shapes.
///
/// Returns a descriptive message naming the first offending key on failure;
/// the message ends up in the `details` of the HTTP error.
pub fn check_shape(value: &Value) -> Result<RawSuggestion, String> {
    let object = value
        .as_object()
        .ok_or_else(|| "response is not a JSON object".to_string())?;

    for key in [
        "field",
        "professions",
        "description",
        "salary",
        "education",
        "benefits",
    ] {
        if !object.contains_key(key) {
            return Err(format!("missing required key `{}`", key));
        }
    }

    let field = require_non_empty_string(object, "field")?;
    let description = require_non_empty_string(object, "description")?;
    let education = require_non_empty_string(object, "education")?;

    let professions = require_array(object, "professions")?;
    let benefits = require_array(object, "benefits")?;

    let salary = object["salary"]
        .as_object()
        .ok_or_else(|| "`salary` must be an object".to_string())?;
    let salary_from = salary
        .get("from")
        .ok_or_else(|| "`salary` is missing `from`".to_string())?
        .clone();
    let salary_to = salary
        .get("to")
        .ok_or_else(|| "`salary` is missing `to`".to_string())?
        .clone();

    Ok(RawSuggestion {
        field,
        professions,
        description,
        salary_from,
        salary_to,
        education,
        benefits,
    })
}

fn require_non_empty_string(
    object: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, String> {
    let value = object[key]
        .as_str()
        .ok_or_else(|| format!("`{}` must be a string", key))?;
    if value.is_empty() {
        return Err(format!("`{}` must not be empty", key));
    }
    Ok(value.to_string())
}

fn require_array(
    object: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<Value>, String> {
    object[key]
        .as_array()
        .cloned()
        .ok_or_else(|| format!("`{}` must be an array", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_shaped() -> Value {
        json!({
            "field": "IT",
            "professions": ["Developer"],
            "description": "<h3>O pozici</h3><p>Popis</p>",
            "salary": {"from": 50000, "to": 70000},
            "education": "Středoškolské s maturitou",
            "benefits": ["Stravenky"]
        })
    }

    #[test]
    fn test_accepts_well_shaped_response() {
        let raw = check_shape(&well_shaped()).unwrap();
        assert_eq!(raw.field, "IT");
        assert_eq!(raw.professions.len(), 1);
        assert_eq!(raw.salary_from, json!(50000));
        assert_eq!(raw.salary_to, json!(70000));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(check_shape(&json!("just a string")).is_err());
        assert!(check_shape(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_rejects_missing_keys() {
        for key in [
            "field",
            "professions",
            "description",
            "salary",
            "education",
            "benefits",
        ] {
            let mut value = well_shaped();
            value.as_object_mut().unwrap().remove(key);
            let err = check_shape(&value).unwrap_err();
            assert!(err.contains(key), "error {:?} should name {}", err, key);
        }
    }

    #[test]
    fn test_rejects_wrong_basic_shapes() {
        let mut value = well_shaped();
        value["professions"] = json!("Developer");
        assert!(check_shape(&value).unwrap_err().contains("professions"));

        let mut value = well_shaped();
        value["salary"] = json!("50000-70000");
        assert!(check_shape(&value).unwrap_err().contains("salary"));

        let mut value = well_shaped();
        value["field"] = json!(42);
        assert!(check_shape(&value).unwrap_err().contains("field"));
    }

    #[test]
    fn test_rejects_empty_strings() {
        for key in ["field", "description", "education"] {
            let mut value = well_shaped();
            value[key] = json!("");
            let err = check_shape(&value).unwrap_err();
            assert!(err.contains(key), "error {:?} should name {}", err, key);
        }
    }

    #[test]
    fn test_rejects_incomplete_salary() {
        let mut value = well_shaped();
        value["salary"] = json!({"from": 50000});
        assert!(check_shape(&value).unwrap_err().contains("to"));

        let mut value = well_shaped();
        value["salary"] = json!({"to": 70000});
        assert!(check_shape(&value).unwrap_err().contains("from"));
    }

    #[test]
    fn test_salary_amount_types_are_not_checked_here() {
        // Non-numeric amounts pass the shape check; the repair pass coerces
        let mut value = well_shaped();
        value["salary"] = json!({"from": "50000", "to": "abc"});
        let raw = check_shape(&value).unwrap();
        assert_eq!(raw.salary_from, json!("50000"));
        assert_eq!(raw.salary_to, json!("abc"));
    }
}
