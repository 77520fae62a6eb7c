use reqwest::blocking::Client;
use tracing::debug;

use super::client::{GeminiConfig, ModelClient};
use super::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::result::AiError;

/// Blocking HTTP client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }
}

impl ModelClient for GeminiClient {
    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        let endpoint = self.config.endpoint();
        debug!(endpoint = %endpoint, turns = request.contents.len(), "posting generateContent");

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(request)
            .send()
            .map_err(|e| AiError::Transport(e.to_string()))?;

        let status = response.status();
        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| AiError::UnexpectedResponse(format!("HTTP {status}: {e}")))?;

        if let Some(err) = &body.error {
            return Err(AiError::InferenceFailed(format!("HTTP {status}: {}", err.message)));
        }
        if !status.is_success() {
            return Err(AiError::Transport(format!("HTTP {status}")));
        }
        Ok(body)
    }
}
