// src/services/openai.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Provider configuration, built once in `main` from the environment and
/// injected into the client. Nothing on the request path reads env vars.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl OpenAiConfig {
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

/// Thin client for the OpenAI Chat Completions API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one chat completion request asking for a JSON object reply.
    ///
    /// Returns `Ok(None)` when the provider answered without any message
    /// content. The call is not retried; callers own any retry policy.
    pub async fn chat_json(
        &self,
        system: &str,
        user: &str,
    ) -> Result<Option<String>, OpenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(OpenAiError::NotConfigured)?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(system.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(user.to_string()),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(model = %self.config.model, "Sending OpenAI chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "OpenAI API request failed");
            return Err(OpenAiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| OpenAiError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            info!(
                model = %self.config.model,
                tokens_used = usage.total_tokens,
                "OpenAI chat completion finished"
            );
        }

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty());

        Ok(content)
    }
}
