pub mod rest;

use async_trait::async_trait;

use crate::models::BotMessage;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Request timeout - chatbot is taking too long to respond")]
    Timeout,

    #[error("Cannot connect to chatbot server. Please ensure Rasa is running.")]
    Unreachable,

    #[error("dialogue engine returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid response from dialogue engine: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            EngineError::Timeout
        } else if e.is_connect() {
            EngineError::Unreachable
        } else {
            EngineError::Decode(e.to_string())
        }
    }
}

/// The conversation manager that decides which slot to ask for next and owns
/// per-sender slot state. The gateway only relays messages to it.
#[async_trait]
pub trait DialogueEngine: Send + Sync {
    async fn send(&self, sender: &str, message: &str) -> Result<Vec<BotMessage>, EngineError>;

    /// Drops all conversation state held for `sender`.
    async fn restart(&self, sender: &str) -> Result<(), EngineError>;

    async fn is_reachable(&self) -> bool;
}
