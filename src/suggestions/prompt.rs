// src/suggestions/prompt.rs
//! Prompt construction for the suggestion provider.
//!
//! The instruction restates every closed vocabulary in full so the provider
//! cannot invent values, names all seven output fields, and asks for a
//! single JSON object.

use super::vocab::{BENEFITS, EDUCATION_LEVELS, FIELDS, PROFESSIONS};

pub const SYSTEM_PROMPT: &str = "You are an assistant inside a recruiting application. \
You translate free-text job titles into structured job-posting metadata. \
You only ever answer with a single JSON object and never with prose.";

/// Build the user instruction embedding the vocabularies and the job title.
pub fn build_user_prompt(position: &str) -> String {
    format!(
        "Suggest job-posting metadata for the position \"{position}\".\n\
        \n\
        Reply with exactly one JSON object with these seven fields:\n\
        - \"field\": one value chosen from the Fields list below\n\
        - \"professions\": an array of at most 3 values chosen from the Professions list below\n\
        - \"description\": a job description as HTML using only the tags <h3>, <p>, <ul> and <li>\n\
        - \"salary\": an object with numeric \"from\" and \"to\" monthly amounts in CZK\n\
        - \"education\": one value chosen from the Education levels list below\n\
        - \"benefits\": an array of values chosen from the Benefits list below\n\
        \n\
        Fields: {fields}\n\
        Professions: {professions}\n\
        Education levels: {education_levels}\n\
        Benefits: {benefits}\n\
        \n\
        Use only values from the lists above for \"field\", \"professions\", \
        \"education\" and \"benefits\". Do not add any other keys.",
        position = position,
        fields = FIELDS.join(", "),
        professions = PROFESSIONS.join(", "),
        education_levels = EDUCATION_LEVELS.join(", "),
        benefits = BENEFITS.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_position() {
        let prompt = build_user_prompt("Senior Rust Developer");
        assert!(prompt.contains("Senior Rust Developer"));
    }

    #[test]
    fn test_prompt_restates_all_vocabularies() {
        let prompt = build_user_prompt("Accountant");

        for field in FIELDS {
            assert!(prompt.contains(field), "missing field {}", field);
        }
        for profession in PROFESSIONS {
            assert!(prompt.contains(profession), "missing profession {}", profession);
        }
        for level in EDUCATION_LEVELS {
            assert!(prompt.contains(level), "missing education level {}", level);
        }
        for benefit in BENEFITS {
            assert!(prompt.contains(benefit), "missing benefit {}", benefit);
        }
    }

    #[test]
    fn test_prompt_names_output_fields_and_tags() {
        let prompt = build_user_prompt("Recruiter");

        for key in [
            "\"field\"",
            "\"professions\"",
            "\"description\"",
            "\"salary\"",
            "\"from\"",
            "\"to\"",
            "\"education\"",
            "\"benefits\"",
        ] {
            assert!(prompt.contains(key), "missing output key {}", key);
        }

        for tag in ["<h3>", "<p>", "<ul>", "<li>"] {
            assert!(prompt.contains(tag), "missing allowed tag {}", tag);
        }

        assert!(prompt.contains("one JSON object"));
    }
}
