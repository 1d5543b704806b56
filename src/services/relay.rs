//! The chat relay: prompt the configured backend, fall back to canned advice
//! when it can't answer, and record the exchange.

use std::sync::Arc;

use tracing::{debug, warn};

use super::prompt::SYSTEM_PROMPT;
use super::provider::CompletionProvider;
use super::transcript_store::TranscriptStore;
use crate::error::AppError;
use crate::message::{ChatRequest, Transcript};

pub const GENERAL_ADVICE: &str = "Consider sustainable practices like crop rotation, composting, and organic fertilizers for better soil health.";

pub const INITIALIZING_REPLY: &str = "AI service initializing. For your farming question, consider sustainable practices like crop rotation, composting, and organic fertilizers.";

pub const DEMO_REPLY: &str = "This is a demo response. To get real AI answers, please set GOOGLE_API_KEY or OPENAI_API_KEY in the .env file. For your question about farming, consider sustainable practices like crop rotation and organic fertilizers.";

/// Completion backend as resolved at startup.
#[derive(Clone)]
pub enum ProviderSlot {
    Ready(Arc<dyn CompletionProvider>),
    /// A credential is configured but no client could be built from it.
    Initializing,
    /// No credential configured: demo mode.
    Absent,
}

impl ProviderSlot {
    pub fn describe(&self) -> &str {
        match self {
            ProviderSlot::Ready(provider) => provider.label(),
            ProviderSlot::Initializing => "initializing",
            ProviderSlot::Absent => "demo",
        }
    }
}

#[derive(Clone)]
pub struct ChatRelay {
    provider: ProviderSlot,
    store: Option<Arc<dyn TranscriptStore>>,
}

impl ChatRelay {
    pub fn new(provider: ProviderSlot, store: Option<Arc<dyn TranscriptStore>>) -> Self {
        Self { provider, store }
    }

    pub fn provider(&self) -> &ProviderSlot {
        &self.provider
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Produce the reply for one message and record it.
    ///
    /// Backend failures are folded into the reply text. A failed transcript
    /// write is returned as an error and the generated reply is dropped.
    pub async fn handle(&self, request: &ChatRequest) -> Result<String, AppError> {
        let reply = self.generate(&request.message).await;

        if let Some(store) = &self.store {
            let transcript = Transcript {
                user_message: request.message.clone(),
                bot_response: reply.clone(),
            };
            store.append(&transcript).await?;
            debug!("transcript stored");
        }

        Ok(reply)
    }

    async fn generate(&self, message: &str) -> String {
        match &self.provider {
            ProviderSlot::Ready(provider) => match provider.generate(SYSTEM_PROMPT, message).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(provider = provider.label(), error = %err, "completion failed");
                    provider_failure_reply(provider.label(), provider.key_name(), &err.to_string())
                }
            },
            ProviderSlot::Initializing => INITIALIZING_REPLY.to_string(),
            ProviderSlot::Absent => DEMO_REPLY.to_string(),
        }
    }
}

pub fn provider_failure_reply(label: &str, key_name: &str, error: &str) -> String {
    format!(
        "{label} API error: {error}. Please check your {key_name} API key. For now, here's some general farming advice: {GENERAL_ADVICE}"
    )
}
