// src/state.rs
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::StorageError;
use crate::services::provider::build_provider;
use crate::services::relay::{ChatRelay, ProviderSlot};
use crate::services::transcript_store::SupabaseStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self { relay }
    }

    /// Resolve the backend and transcript store once, at startup.
    ///
    /// A provider key whose client cannot be built leaves the relay in the
    /// initializing state; a storage client that cannot be built is fatal.
    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let provider = match &config.provider {
            None => {
                warn!("no provider API key configured, serving demo responses");
                ProviderSlot::Absent
            }
            Some(provider_config) => match build_provider(provider_config) {
                Ok(provider) => {
                    info!(
                        provider = provider_config.kind.label(),
                        model = %provider_config.model,
                        "completion backend ready"
                    );
                    ProviderSlot::Ready(provider)
                }
                Err(err) => {
                    warn!(
                        provider = provider_config.kind.label(),
                        error = %err,
                        "could not build completion client"
                    );
                    ProviderSlot::Initializing
                }
            },
        };

        let store = match &config.storage {
            Some(storage) => {
                info!(url = %storage.url, "transcripts will be stored");
                Some(SupabaseStore::shared(storage)?)
            }
            None => {
                info!("storage not configured, transcripts are not persisted");
                None
            }
        };

        Ok(Self::new(ChatRelay::new(provider, store)))
    }
}
