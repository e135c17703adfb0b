use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::errors::AppError;
use crate::models::{
    BotMessage, ChatRequest, ChatResponse, SessionRecord, WebChatRequest, WebChatResponse,
};
use crate::state::AppState;

use super::now_timestamp;

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = require_message(body.message, "Missing 'message' in request body")?;
    let sender = sender_or_new(body.sender);

    let responses = relay(&state, &sender, &message).await?;

    Ok(Json(ChatResponse {
        sender,
        responses,
        timestamp: now_timestamp(),
    }))
}

// POST /web/chat
pub async fn web_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<WebChatRequest>,
) -> Result<Json<WebChatResponse>, AppError> {
    let message = require_message(body.message, "No message provided")?;
    let session_id = sender_or_new(body.session_id);

    let responses = relay(&state, &session_id, &message)
        .await?
        .into_iter()
        .map(|m| m.text.unwrap_or_default())
        .collect();

    Ok(Json(WebChatResponse {
        session_id,
        responses,
    }))
}

fn require_message(message: Option<String>, error: &str) -> Result<String, AppError> {
    message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(error.to_string()))
}

fn sender_or_new(sender: Option<String>) -> String {
    sender
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

async fn relay(
    state: &Arc<AppState>,
    sender: &str,
    message: &str,
) -> Result<Vec<BotMessage>, AppError> {
    tracing::info!(sender = %sender, message = %message, "user message");

    let responses = state.engine.send(sender, message).await.map_err(|e| {
        tracing::error!(error = %e, sender = %sender, "dialogue engine request failed");
        e
    })?;

    for reply in &responses {
        tracing::info!(
            sender = %sender,
            text = reply.text.as_deref().unwrap_or(""),
            "bot reply"
        );
    }

    record_activity(state, sender, message);
    Ok(responses)
}

/// Bookkeeping only; a store failure never fails the chat turn.
fn record_activity(state: &AppState, sender: &str, message: &str) {
    let now = Utc::now().naive_utc();
    let result = state.sessions.get(sender).and_then(|existing| {
        let mut session = existing.unwrap_or_else(|| SessionRecord::new(sender, now));
        session.touch(message, now);
        state.sessions.put(&session)
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, sender = %sender, "failed to update session");
    }
}
