// src/suggestions/service.rs
//! The suggestion pipeline: prompt → provider call → parse → shape check →
//! repair.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::common::ApiError;
use crate::services::{OpenAiClient, OpenAiError};

use super::models::SuggestionResult;
use super::prompt::{build_user_prompt, SYSTEM_PROMPT};
use super::repair::repair;
use super::shape::check_shape;

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    #[error("position must not be empty")]
    EmptyPosition,

    #[error("request to the suggestion provider failed: {0}")]
    Request(String),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("provider response is not valid JSON: {message}")]
    Parse {
        message: String,
        /// Raw unparsed content, kept for server-side diagnostics only.
        raw: String,
    },

    #[error("provider response has the wrong shape: {0}")]
    Shape(String),
}

impl From<OpenAiError> for SuggestError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::NotConfigured => SuggestError::MissingApiKey,
            OpenAiError::RequestFailed(msg) => SuggestError::Request(msg),
            OpenAiError::InvalidResponse(msg) => SuggestError::Request(msg),
        }
    }
}

impl From<SuggestError> for ApiError {
    fn from(err: SuggestError) -> Self {
        match err {
            SuggestError::MissingApiKey => ApiError::Configuration(err.to_string()),
            SuggestError::EmptyPosition => ApiError::BadRequest(err.to_string()),
            SuggestError::Request(msg) => ApiError::UpstreamRequestFailed(msg),
            SuggestError::EmptyResponse => ApiError::UpstreamEmptyResponse(err.to_string()),
            // The raw content never leaves the server; only the parser
            // message is exposed as an opaque detail
            SuggestError::Parse { message, .. } => ApiError::UpstreamParseError {
                message: "provider response is not valid JSON".to_string(),
                details: Some(message),
            },
            SuggestError::Shape(detail) => ApiError::UpstreamShapeError {
                message: "provider response has the wrong shape".to_string(),
                details: Some(detail),
            },
        }
    }
}

/// Stateless suggestion service. Every call is an independent
/// request/response cycle; nothing is cached or persisted between calls.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    client: OpenAiClient,
}

impl SuggestionService {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Translate a job title into a vocabulary-constrained suggestion.
    ///
    /// The credential check runs before anything else so a misconfigured
    /// deployment fails identically for every input; the provider is never
    /// called for an empty position.
    pub async fn suggest(&self, position: &str) -> Result<SuggestionResult, SuggestError> {
        if !self.client.is_configured() {
            return Err(SuggestError::MissingApiKey);
        }

        let position = position.trim();
        if position.is_empty() {
            return Err(SuggestError::EmptyPosition);
        }

        debug!(position = %position, model = %self.client.model(), "Requesting suggestion");

        let content = self
            .client
            .chat_json(SYSTEM_PROMPT, &build_user_prompt(position))
            .await?
            .ok_or(SuggestError::EmptyResponse)?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            error!(
                error = %e,
                raw_content = %content,
                "Provider returned unparsable content"
            );
            SuggestError::Parse {
                message: e.to_string(),
                raw: content.clone(),
            }
        })?;

        let raw = check_shape(&value).map_err(SuggestError::Shape)?;
        let result = repair(raw);

        info!(
            position = %position,
            field = %result.field,
            professions = result.professions.len(),
            benefits = result.benefits.len(),
            "Suggestion completed"
        );

        Ok(result)
    }
}
