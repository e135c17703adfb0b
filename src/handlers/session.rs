use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SessionRecord;
use crate::state::AppState;

// POST /session/new
pub async fn new_session(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let sender = uuid::Uuid::new_v4().to_string();
    state
        .sessions
        .put(&SessionRecord::new(&sender, Utc::now().naive_utc()))
        .map_err(AppError::Sessions)?;

    tracing::info!(sender = %sender, "new session created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "sender": sender,
            "message": "New session created successfully",
        })),
    ))
}

// POST /session/reset
#[derive(Deserialize)]
pub struct ResetRequest {
    pub sender: Option<String>,
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResetRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sender = body
        .sender
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'sender' in request body".to_string()))?;

    state.engine.restart(&sender).await.map_err(|e| {
        tracing::error!(error = %e, sender = %sender, "failed to reset session");
        e
    })?;

    state.sessions.delete(&sender).map_err(AppError::Sessions)?;
    tracing::info!(sender = %sender, "session reset");

    Ok(Json(serde_json::json!({
        "sender": sender,
        "message": "Session reset successfully",
    })))
}

// GET /session/active
pub async fn active_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.sessions.list().map_err(AppError::Sessions)?;

    let mut by_sender = serde_json::Map::new();
    for session in &sessions {
        by_sender.insert(
            session.sender.clone(),
            serde_json::json!({
                "created_at": session.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "last_message": session.last_message,
                "timestamp": session.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            }),
        );
    }

    Ok(Json(serde_json::json!({
        "active_sessions": sessions.len(),
        "sessions": by_sender,
    })))
}
