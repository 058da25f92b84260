use std::env;

use log::debug;
use reqwest::Client;

use crate::error::{AnalyzerError, Result};
use crate::llm::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable consulted by [`GeminiClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client around an explicitly supplied credential.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Reads the credential from the environment. A missing or empty key is a
    /// configuration error reported through the normal error channel, not a
    /// panic at startup.
    pub fn from_env() -> Result<Self> {
        match env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(AnalyzerError::MissingApiKey),
        }
    }

    /// Overrides the API endpoint, e.g. to point at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) async fn generate_content(
        &self,
        model: &str,
        system_prompt: &str,
        messages: Vec<Content>,
        response_schema: Option<serde_json::Value>,
        temperature: Option<f64>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: messages,
            system_instruction: Some(Content::user(system_prompt)),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
                temperature,
            },
        };

        debug!("Sending generateContent request to model {}", model);

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(AnalyzerError::AnalysisFailed(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| AnalyzerError::AnalysisFailed("No candidates returned".to_string()))?
            .first()
            .ok_or_else(|| AnalyzerError::AnalysisFailed("Empty candidates list".to_string()))?
            .content
            .parts
            .first()
            .ok_or_else(|| AnalyzerError::AnalysisFailed("No parts in content".to_string()))?
            .clone();

        match part {
            Part::Text { text } => Ok(text),
            Part::Other(_) => Err(AnalyzerError::AnalysisFailed(
                "Model returned non-text content".to_string(),
            )),
        }
    }
}
