// src/suggestions/handlers.rs
//! Suggestion endpoint handlers

use axum::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::common::error::ApiError;
use crate::common::state::AppState;

use super::models::{SuggestionRequest, SuggestionResult};

/// Suggest job-posting metadata for a free-text position title
/// POST /api/suggestions
pub async fn suggest_position_metadata(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResult>, ApiError> {
    let position = req.position.as_deref().unwrap_or("");
    info!(position = %position, "Suggesting job-posting metadata");

    let state = state_lock.read().await;
    let result = state
        .suggestion_service
        .suggest(position)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to produce suggestion");
            ApiError::from(e)
        })?;

    Ok(Json(result))
}
