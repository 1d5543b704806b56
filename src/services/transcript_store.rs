// src/services/transcript_store.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::message::Transcript;

pub const TRANSCRIPT_TABLE: &str = "chats";

/// Append-only sink for chat exchanges.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn append(&self, transcript: &Transcript) -> Result<(), StorageError>;
}

/// Inserts rows through Supabase's PostgREST endpoint.
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            endpoint: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                TRANSCRIPT_TABLE
            ),
            key: config.key.clone(),
        })
    }

    pub fn shared(config: &StorageConfig) -> Result<Arc<dyn TranscriptStore>, StorageError> {
        Ok(Arc::new(Self::new(config)?))
    }
}

#[async_trait]
impl TranscriptStore for SupabaseStore {
    async fn append(&self, transcript: &Transcript) -> Result<(), StorageError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=minimal")
            .json(transcript)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Rejected { status: status.as_u16(), body });
        }
        Ok(())
    }
}
