use std::time::Duration;

use tracing::debug;

use crate::error::{GeminiError, Result};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            http,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single prompt and return the completion text verbatim.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(GeminiError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_defaults_to_public_endpoint() {
        let client = GeminiClient::new("test-key", DEFAULT_MODEL);
        assert_eq!(client.base_url, GEMINI_API_URL);
        assert_eq!(client.model(), "gemini-1.5-flash");
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let client = GeminiClient::new("test-key", DEFAULT_MODEL)
            .with_base_url("http://localhost:9090/");
        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
