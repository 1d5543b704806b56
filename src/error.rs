// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatResponse;

/// Failure talking to a completion backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{status}: {body}")]
    Api { status: u16, body: String },
    #[error("response contained no generated text")]
    EmptyResponse,
}

/// Failure appending a transcript.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("storage rejected insert ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("invalid SUPABASE_URL '{0}'")]
    InvalidStorageUrl(String),
}

/// Anything that escapes the chat relay. Rendered as the `error` body.
///
/// Backend failures never get here; the relay turns them into reply text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chat request failed");
        // Failures share the 200 status; callers tell them apart by body shape.
        (StatusCode::OK, Json(ChatResponse::error(self.to_string()))).into_response()
    }
}
