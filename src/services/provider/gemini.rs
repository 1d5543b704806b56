// src/services/provider/gemini.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CompletionProvider, api_error, http_client};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::services::prompt::single_turn_prompt;

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Single-turn `generateContent` backend. The system instruction is folded
/// into the prompt text.
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client()?,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn label(&self) -> &str {
        "Google Gemini"
    }

    fn key_name(&self) -> &str {
        "Google"
    }

    async fn generate(&self, system: &str, message: &str) -> Result<String, ProviderError> {
        let prompt = single_turn_prompt(system, message);
        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: &prompt }] }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        // A blocked candidate arrives with no parts; treat it like a failed call.
        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}
