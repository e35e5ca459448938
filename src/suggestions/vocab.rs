// src/suggestions/vocab.rs
//! Closed vocabularies for suggestion output.
//!
//! Every enumerated value a suggestion can carry is defined here; the repair
//! pass guarantees results never leave these sets. The UI renders the same
//! lists in its select boxes, so order matters.

/// Job fields offered in the posting form.
pub const FIELDS: [&str; 10] = [
    "IT",
    "Marketing",
    "Finance",
    "Sales",
    "HR",
    "Operations",
    "Design",
    "Legal",
    "R&D",
    "Customer Support",
];

/// Professions selectable within the job fields.
pub const PROFESSIONS: [&str; 30] = [
    "Developer",
    "Frontend Developer",
    "Backend Developer",
    "Fullstack Developer",
    "Mobile Developer",
    "DevOps Engineer",
    "QA Engineer",
    "Data Analyst",
    "Data Engineer",
    "Data Scientist",
    "Product Manager",
    "Project Manager",
    "Scrum Master",
    "UX Designer",
    "UI Designer",
    "Graphic Designer",
    "Marketing Specialist",
    "Content Specialist",
    "Social Media Manager",
    "SEO Specialist",
    "Accountant",
    "Financial Analyst",
    "Payroll Specialist",
    "Sales Representative",
    "Account Manager",
    "Business Development Manager",
    "Recruiter",
    "HR Generalist",
    "Customer Support Specialist",
    "Legal Counsel",
];

/// Education levels, ordered from elementary to doctoral.
pub const EDUCATION_LEVELS: [&str; 7] = [
    "Základní",
    "Středoškolské bez maturity",
    "Středoškolské s maturitou",
    "Vyšší odborné",
    "Bakalářské",
    "Magisterské",
    "Doktorské",
];

/// Benefits offered in the posting form.
pub const BENEFITS: [&str; 11] = [
    "5 týdnů dovolené",
    "Stravenky",
    "MultiSport karta",
    "Home office",
    "Flexibilní pracovní doba",
    "Sick days",
    "Příspěvek na penzijní připojištění",
    "Firemní notebook",
    "Mobilní telefon",
    "Vzdělávací kurzy",
    "Občerstvení na pracovišti",
];

/// Fallback when the provider invents a field.
pub const DEFAULT_FIELD: &str = FIELDS[0];

/// Fallback when the provider invents an education level. The posting form
/// requires exactly one value, so the most common Czech level is used.
pub const DEFAULT_EDUCATION: &str = EDUCATION_LEVELS[2];

pub fn is_field(value: &str) -> bool {
    FIELDS.contains(&value)
}

pub fn is_profession(value: &str) -> bool {
    PROFESSIONS.contains(&value)
}

pub fn is_education_level(value: &str) -> bool {
    EDUCATION_LEVELS.contains(&value)
}

pub fn is_benefit(value: &str) -> bool {
    BENEFITS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(FIELDS.len(), 10);
        assert_eq!(PROFESSIONS.len(), 30);
        assert_eq!(EDUCATION_LEVELS.len(), 7);
        assert_eq!(BENEFITS.len(), 11);
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(FIELDS.iter().collect::<HashSet<_>>().len(), FIELDS.len());
        assert_eq!(
            PROFESSIONS.iter().collect::<HashSet<_>>().len(),
            PROFESSIONS.len()
        );
        assert_eq!(
            EDUCATION_LEVELS.iter().collect::<HashSet<_>>().len(),
            EDUCATION_LEVELS.len()
        );
        assert_eq!(
            BENEFITS.iter().collect::<HashSet<_>>().len(),
            BENEFITS.len()
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_FIELD, "IT");
        assert_eq!(DEFAULT_EDUCATION, "Středoškolské s maturitou");
        assert!(is_field(DEFAULT_FIELD));
        assert!(is_education_level(DEFAULT_EDUCATION));
    }

    #[test]
    fn test_membership() {
        assert!(is_profession("Developer"));
        assert!(is_profession("Data Analyst"));
        assert!(!is_profession("FakeRole"));

        assert!(is_benefit("Stravenky"));
        assert!(!is_benefit("Unlimited vacation"));

        assert!(is_education_level("Doktorské"));
        assert!(!is_education_level("PhD from Mars University"));
    }
}
