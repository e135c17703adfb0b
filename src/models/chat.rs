use serde::{Deserialize, Serialize};

/// One reply from the Dialogue Engine. Unknown keys (buttons, images, custom
/// payloads) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BotMessage {
    pub fn text(text: &str) -> Self {
        Self {
            recipient_id: None,
            text: Some(text.to_string()),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub sender: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub sender: String,
    pub responses: Vec<BotMessage>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct WebChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WebChatResponse {
    pub session_id: String,
    pub responses: Vec<String>,
}
