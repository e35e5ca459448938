// Application state shared across all modules

use std::sync::Arc;

use crate::suggestions::service::SuggestionService;

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub suggestion_service: Arc<SuggestionService>,
}
