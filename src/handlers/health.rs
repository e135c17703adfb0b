use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

use super::now_timestamp;

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let rasa_status = if state.engine.is_reachable().await {
        "running"
    } else {
        "down"
    };

    Json(serde_json::json!({
        "status": "ok",
        "timestamp": now_timestamp(),
        "rasa_status": rasa_status,
    }))
}

// GET /docs
pub async fn docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "Hotel Booking Chatbot API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API for interacting with the hotel booking chatbot",
        "endpoints": [
            {"path": "/health", "method": "GET", "description": "Check API and dialogue engine health"},
            {
                "path": "/chat",
                "method": "POST",
                "description": "Send a message to the chatbot",
                "body": {"message": "string (required)", "sender": "string (optional)"}
            },
            {
                "path": "/web/chat",
                "method": "POST",
                "description": "Send a message and receive plain-text replies",
                "body": {"message": "string (required)", "session_id": "string (optional)"}
            },
            {"path": "/session/new", "method": "POST", "description": "Create a new conversation session"},
            {
                "path": "/session/reset",
                "method": "POST",
                "description": "Reset an existing conversation",
                "body": {"sender": "string (required)"}
            },
            {"path": "/session/active", "method": "GET", "description": "Get list of active sessions"},
            {"path": "/bookings", "method": "GET", "description": "Get all bookings from the system"},
            {"path": "/docs", "method": "GET", "description": "This documentation"}
        ],
        "examples": {
            "chat": {
                "request": {"message": "I want to book a room", "sender": "user123"},
                "response": {
                    "sender": "user123",
                    "responses": [{"text": "Great! What's your name?"}],
                    "timestamp": "2024-11-16T13:45:00"
                }
            }
        }
    }))
}
