// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of `POST /chat`. Serialized as either `{"response": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { response: String },
    Failure { error: String },
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        ChatResponse::Reply { response: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        ChatResponse::Failure { error: text.into() }
    }
}

/// One persisted exchange. Row id and timestamp belong to the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transcript {
    pub user_message: String,
    pub bot_response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub docs: String,
    pub chat: String,
}
