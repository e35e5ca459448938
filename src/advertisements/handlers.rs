// src/advertisements/handlers.rs
//! Advertisement dashboard handlers.
//!
//! Nothing here is backed by storage: listings are synthesized per request
//! and the portal operations (extend, republish, cancel) are simulated.

use axum::extract::{Path, Query};
use axum::Json;
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::info;

use crate::common::error::ApiError;
use crate::common::id_generator::{is_valid_id, EntityPrefix};
use crate::common::Validator;

use super::generator::{generate_advertisement_with_id, generate_advertisements};
use super::models::*;
use super::validators::{ExtendAdvertisementValidator, ListAdvertisementsValidator};

const DEFAULT_PAGE_SIZE: usize = 20;

fn check_advertisement_id(id: &str) -> Result<(), ApiError> {
    if is_valid_id(id, EntityPrefix::Advertisement) {
        Ok(())
    } else {
        Err(ApiError::ValidationError(
            "Invalid advertisement ID format".to_string(),
        ))
    }
}

/// List advertisements for the dashboard
/// GET /api/advertisements
pub async fn list_advertisements(
    Query(query): Query<ListAdvertisementsQuery>,
) -> Result<Json<AdvertisementListResponse>, ApiError> {
    let validation = ListAdvertisementsValidator.validate(&query);
    if !validation.is_valid() {
        return Err(validation.into());
    }

    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let batch_size = rand::thread_rng().gen_range(40..=80);
    let mut advertisements = generate_advertisements(batch_size);

    if let Some(status) = &query.status {
        advertisements.retain(|ad| &ad.status == status);
    }

    let total = advertisements.len();
    let advertisements: Vec<Advertisement> = advertisements
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Ok(Json(AdvertisementListResponse {
        advertisements,
        total,
        page,
        page_size,
    }))
}

/// Aggregate advertisement counters for the dashboard header
/// GET /api/advertisements/stats
pub async fn get_advertisement_stats() -> Result<Json<AdvertisementStats>, ApiError> {
    let batch_size = rand::thread_rng().gen_range(40..=80);
    let advertisements = generate_advertisements(batch_size);

    let stats = AdvertisementStats {
        total: advertisements.len(),
        active: advertisements.iter().filter(|a| a.status == "active").count(),
        expired: advertisements.iter().filter(|a| a.status == "expired").count(),
        draft: advertisements.iter().filter(|a| a.status == "draft").count(),
        total_views: advertisements.iter().map(|a| a.views_count as u64).sum(),
        total_candidates: advertisements
            .iter()
            .map(|a| a.candidates_count as u64)
            .sum(),
    };

    Ok(Json(stats))
}

/// Extend an advertisement's validity on the connected portals (simulated)
/// POST /api/advertisements/:id/extend
pub async fn extend_advertisement(
    Path(id): Path<String>,
    Json(req): Json<ExtendAdvertisementRequest>,
) -> Result<Json<Advertisement>, ApiError> {
    check_advertisement_id(&id)?;

    let validation = ExtendAdvertisementValidator.validate(&req);
    if !validation.is_valid() {
        return Err(validation.into());
    }

    info!(advertisement_id = %id, days = req.days, "Extending advertisement");

    let mut advertisement = generate_advertisement_with_id(id);
    advertisement.status = "active".to_string();
    advertisement.expires_at = (Utc::now() + Duration::days(req.days as i64)).to_rfc3339();

    Ok(Json(advertisement))
}

/// Republish an advertisement for a fresh 30-day period (simulated)
/// POST /api/advertisements/:id/republish
pub async fn republish_advertisement(
    Path(id): Path<String>,
) -> Result<Json<Advertisement>, ApiError> {
    check_advertisement_id(&id)?;

    info!(advertisement_id = %id, "Republishing advertisement");

    let now = Utc::now();
    let mut advertisement = generate_advertisement_with_id(id);
    advertisement.status = "active".to_string();
    advertisement.created_at = now.to_rfc3339();
    advertisement.expires_at = (now + Duration::days(30)).to_rfc3339();
    advertisement.candidates_count = 0;
    advertisement.views_count = 0;

    Ok(Json(advertisement))
}

/// Take an advertisement down from the connected portals (simulated)
/// POST /api/advertisements/:id/cancel
pub async fn cancel_advertisement(
    Path(id): Path<String>,
) -> Result<Json<Advertisement>, ApiError> {
    check_advertisement_id(&id)?;

    info!(advertisement_id = %id, "Cancelling advertisement");

    let mut advertisement = generate_advertisement_with_id(id);
    advertisement.status = "expired".to_string();
    advertisement.expires_at = Utc::now().to_rfc3339();

    Ok(Json(advertisement))
}
