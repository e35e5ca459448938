// src/advertisements/generator.rs
//! Mock advertisement generator.
//!
//! There is no persistence layer: every request that needs advertisement
//! data synthesizes a fresh batch here. Generated values stay inside the
//! same closed vocabularies the rest of the system uses.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::id_generator::generate_advertisement_id;
use crate::suggestions::vocab::FIELDS;

use super::models::{Advertisement, STATUSES};

/// Job portals the product pretends to publish to
pub const PORTALS: [&str; 5] = ["Jobs.cz", "Prace.cz", "LinkedIn", "StartupJobs", "Profesia.sk"];

const LOCATIONS: [&str; 8] = [
    "Praha",
    "Brno",
    "Ostrava",
    "Plzeň",
    "Olomouc",
    "Liberec",
    "Hradec Králové",
    "Remote",
];

/// Sample titles per field, used to keep generated data plausible
fn titles_for_field(field: &str) -> &'static [&'static str] {
    match field {
        "IT" => &[
            "Backend vývojář (Rust)",
            "Frontend vývojář",
            "DevOps inženýr",
            "Tester / QA",
            "Datový analytik",
        ],
        "Marketing" => &[
            "Marketingový specialista",
            "Social Media Manager",
            "SEO specialista",
            "Copywriter",
        ],
        "Finance" => &["Účetní", "Finanční analytik", "Mzdová účetní"],
        "Sales" => &[
            "Obchodní zástupce",
            "Account Manager",
            "Business Development Manager",
        ],
        "HR" => &["Recruiter", "HR generalista", "HR Business Partner"],
        "Operations" => &["Office Manager", "Vedoucí provozu", "Logistik"],
        "Design" => &["UX designér", "UI designér", "Grafik"],
        "Legal" => &["Podnikový právník", "Compliance specialista"],
        "R&D" => &["Výzkumný pracovník", "Vývojový inženýr"],
        "Customer Support" => &["Specialista zákaznické podpory", "Team Leader podpory"],
        _ => &["Specialista"],
    }
}

/// Synthesize one advertisement under the given id.
///
/// `status` drives the timestamps: active ads still have time left, expired
/// ones ran out, drafts were never published (no portals, no traffic).
pub fn generate_advertisement_with_id(id: String) -> Advertisement {
    let mut rng = rand::thread_rng();

    let field = *FIELDS.choose(&mut rng).expect("FIELDS is non-empty");
    let title = *titles_for_field(field)
        .choose(&mut rng)
        .expect("title pool is non-empty");
    let location = *LOCATIONS.choose(&mut rng).expect("LOCATIONS is non-empty");

    let salary_min = rng.gen_range(28..=60) * 1000;
    let salary_max = salary_min + rng.gen_range(5..=25) * 1000;

    let status = *STATUSES.choose(&mut rng).expect("STATUSES is non-empty");

    let created_days_ago = match status {
        "expired" => rng.gen_range(31..=90),
        _ => rng.gen_range(0..=25),
    };
    let created_at = Utc::now() - Duration::days(created_days_ago);
    let expires_at = created_at + Duration::days(30);

    let (portals, candidates_count, views_count) = if status == "draft" {
        (Vec::new(), 0, 0)
    } else {
        let portal_count = rng.gen_range(1..=3);
        let portals = PORTALS
            .choose_multiple(&mut rng, portal_count)
            .map(|p| p.to_string())
            .collect();
        (portals, rng.gen_range(0..=120), rng.gen_range(50..=5000))
    };

    Advertisement {
        id,
        title: title.to_string(),
        field: field.to_string(),
        location: location.to_string(),
        salary_min,
        salary_max,
        status: status.to_string(),
        portals,
        candidates_count,
        views_count,
        created_at: created_at.to_rfc3339(),
        expires_at: expires_at.to_rfc3339(),
    }
}

pub fn generate_advertisement() -> Advertisement {
    generate_advertisement_with_id(generate_advertisement_id())
}

/// Synthesize a batch of advertisements for listing endpoints
pub fn generate_advertisements(count: usize) -> Vec<Advertisement> {
    (0..count).map(|_| generate_advertisement()).collect()
}
