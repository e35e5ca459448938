// src/advertisements/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Advertisement Models
// ============================================================================

/// Advertisement lifecycle states shown on the recruiter dashboard
pub const STATUSES: [&str; 3] = ["active", "expired", "draft"];

#[derive(Debug, Clone, Serialize)]
pub struct Advertisement {
    pub id: String,
    pub title: String,
    pub field: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub status: String,
    pub portals: Vec<String>,
    pub candidates_count: u32,
    pub views_count: u32,
    pub created_at: String,
    pub expires_at: String,
}

// Paginated advertisement list response
#[derive(Debug, Serialize)]
pub struct AdvertisementListResponse {
    pub advertisements: Vec<Advertisement>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct ListAdvertisementsQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtendAdvertisementRequest {
    pub days: u32,
}

/// Dashboard counters aggregated over one synthesized batch
#[derive(Debug, Serialize)]
pub struct AdvertisementStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub draft: usize,
    pub total_views: u64,
    pub total_candidates: u64,
}
