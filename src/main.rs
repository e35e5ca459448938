// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod advertisements;
mod common;
mod eshop;
mod logging_middleware;
mod services;
mod suggestions;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::AppState;
use services::{OpenAiClient, OpenAiConfig};
use suggestions::SuggestionService;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let openai_api_key = env::var("OPENAI_API_KEY").ok();
    let openai_base_url = env::var("OPENAI_BASE_URL").ok();
    let openai_model = env::var("OPENAI_MODEL").ok();

    if openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; the suggestion endpoint will return configuration errors");
    }

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Client::builder().no_proxy().build()?;

    let openai_config = OpenAiConfig::new(openai_api_key, openai_base_url, openai_model);
    let openai_client = OpenAiClient::new(openai_config, http_client);
    info!("OpenAI client initialized (model: {})", openai_client.model());

    let suggestion_service = Arc::new(SuggestionService::new(openai_client));
    info!("SuggestionService initialized");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState { suggestion_service };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        // ====================================================================
        // SUGGESTION ROUTES (AI job-field metadata)
        // ====================================================================
        .merge(suggestions::suggestions_routes())
        // ====================================================================
        // ADVERTISEMENT ROUTES (dashboard listing and portal simulation)
        // ====================================================================
        .merge(advertisements::advertisements_routes())
        // ====================================================================
        // ESHOP ROUTES (add-on marketplace)
        // ====================================================================
        .merge(eshop::eshop_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        // Add request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared.clone()))
        .layer({
            // Get CORS origins from environment variable
            let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:5173".to_string()
            });

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE])
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
