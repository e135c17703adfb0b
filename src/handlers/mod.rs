pub mod actions;
pub mod bookings;
pub mod chat;
pub mod health;
pub mod session;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Public chat gateway: message relay, session bookkeeping, booking listing.
pub fn gateway_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/docs", get(health::docs))
        .route("/chat", post(chat::chat))
        .route("/web/chat", post(chat::web_chat))
        .route("/session/new", post(session::new_session))
        .route("/session/reset", post(session::reset_session))
        .route("/session/active", get(session::active_sessions))
        .route("/bookings", get(bookings::list_bookings))
        .with_state(state)
}

/// Endpoint the Dialogue Engine calls back to run form validation and
/// booking actions.
pub fn action_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(actions::health))
        .route("/webhook", post(actions::run_action))
        .with_state(state)
}

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
