//! Completion backends.
//!
//! Each backend turns a system instruction plus one user message into
//! generated text. Exactly one is built at startup, from whichever credential
//! is configured, and the relay only ever sees it through [`CompletionProvider`].

pub mod gemini;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::ProviderError;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Name shown to users when the backend fails, e.g. "Google Gemini".
    fn label(&self) -> &str;

    /// Which API key the user is told to check. Defaults to the label.
    fn key_name(&self) -> &str {
        self.label()
    }

    async fn generate(&self, system: &str, message: &str) -> Result<String, ProviderError>;
}

/// Build the backend selected by `config`.
pub fn build_provider(config: &ProviderConfig) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
    let provider: Arc<dyn CompletionProvider> = match config.kind {
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(config)?),
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(config)?),
    };
    Ok(provider)
}

pub(crate) fn http_client() -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder().build()?)
}

// Gemini and OpenAI both wrap failures as {"error": {"message": ...}}.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Turn a non-2xx upstream reply into a [`ProviderError`], keeping the
/// provider's own message when it sent one.
pub(crate) async fn api_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let raw = response.text().await.unwrap_or_default();
    let body = match serde_json::from_str::<ApiErrorBody>(&raw) {
        Ok(parsed) => parsed.error.message,
        Err(_) => raw,
    };
    ProviderError::Api { status, body }
}
