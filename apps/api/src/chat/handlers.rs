//! Axum route handlers for the chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::intents::{respond, ChatReply};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(flatten)]
    pub reply: ChatReply,
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = respond(state.llm.as_ref(), &request.message).await;
    Ok(Json(ChatResponse {
        success: true,
        reply,
    }))
}
