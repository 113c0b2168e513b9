//! GeminiClient - thin reqwest wrapper around `generateContent`.

use crate::config::GenAiConfig;
use crate::error::GenAiError;

use super::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";
const ENTITY_NOT_FOUND: &str = "Requested entity was not found";

/// Client for the generative-language REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GenAiConfig,
}

impl GeminiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: GenAiConfig) -> Self {
        Self { http, config }
    }

    /// Client configured from the environment (see [`GenAiConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(GenAiConfig::from_env())
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    /// POST `request` to `models/{model}:generateContent`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );

        tracing::debug!(model, "calling generateContent");
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        Ok(response.json().await?)
    }
}

/// Map a non-2xx response onto an error, singling out invalid credentials.
pub(crate) fn classify_failure(status: u16, body: &str) -> GenAiError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    };
    if message.contains(ENTITY_NOT_FOUND) {
        GenAiError::EntityNotFound
    } else {
        GenAiError::Service { status, message }
    }
}
