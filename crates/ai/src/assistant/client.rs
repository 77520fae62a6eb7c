use std::time::Duration;

use super::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::result::AiError;

/// Transport to a hosted generative model.
pub trait ModelClient: Send + Sync {
    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError>;
}

impl<C: ModelClient + ?Sized> ModelClient for Box<C> {
    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        (**self).generate_content(request)
    }
}

/// Connection settings for the Gemini `generateContent` API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint URL without the API key (the key travels as a query parameter).
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let cfg = GeminiConfig::new("k").with_base_url("http://localhost:9000/v1beta/");
        assert_eq!(
            cfg.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
