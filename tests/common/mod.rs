#![allow(dead_code)]

use std::sync::Arc;

use agrimind_backend::error::{ProviderError, StorageError};
use agrimind_backend::message::Transcript;
use agrimind_backend::routes::create_router;
use agrimind_backend::services::provider::CompletionProvider;
use agrimind_backend::services::relay::{ChatRelay, ProviderSlot};
use agrimind_backend::services::transcript_store::TranscriptStore;
use agrimind_backend::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use tokio::sync::Mutex;
use tower::util::ServiceExt;

/// Provider that answers with a fixed reply or a fixed upstream error.
pub struct ScriptedProvider {
    outcome: Result<String, String>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(text.to_string()), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Err(message.to_string()), calls: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn label(&self) -> &str {
        "Scripted"
    }

    async fn generate(&self, system: &str, message: &str) -> Result<String, ProviderError> {
        self.calls.lock().await.push((system.to_string(), message.to_string()));
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(body) => Err(ProviderError::Api { status: 429, body: body.clone() }),
        }
    }
}

/// Store that keeps transcripts in memory, or rejects every insert.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<Vec<Transcript>>,
    reject: bool,
}

impl MemoryStore {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self { rows: Mutex::new(Vec::new()), reject: true })
    }
}

#[async_trait]
impl TranscriptStore for MemoryStore {
    async fn append(&self, transcript: &Transcript) -> Result<(), StorageError> {
        if self.reject {
            return Err(StorageError::Rejected {
                status: 503,
                body: "database unavailable".to_string(),
            });
        }
        self.rows.lock().await.push(transcript.clone());
        Ok(())
    }
}

pub fn app(provider: ProviderSlot, store: Option<Arc<dyn TranscriptStore>>) -> Router {
    let state = Arc::new(AppState::new(ChatRelay::new(provider, store)));
    create_router("public").with_state(state)
}

pub fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
