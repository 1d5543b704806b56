use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, WelcomeResponse},
    state::SharedState,
};

pub async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to AgriMind AI Agent API".to_string(),
        docs: "/docs".to_string(),
        chat: "/chat".to_string(),
    })
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state.relay.handle(&payload).await?;
    Ok(Json(ChatResponse::reply(reply)))
}

// Route listing for clients following the `docs` link.
pub async fn docs_handler(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "title": "AgriMind AI Agent API",
        "provider": state.relay.provider().describe(),
        "persistence": state.relay.has_store(),
        "routes": [
            { "method": "GET", "path": "/", "description": "Welcome and discovery links" },
            {
                "method": "POST",
                "path": "/chat",
                "request": { "message": "string" },
                "response": [{ "response": "string" }, { "error": "string" }],
                "description": "Ask the agricultural mentor a question"
            },
            { "method": "GET", "path": "/docs", "description": "This listing" },
            { "method": "GET", "path": "/health", "description": "Liveness probe" }
        ]
    }))
}
