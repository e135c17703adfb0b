use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Gateway-side bookkeeping for one conversation. The Dialogue Engine owns the
/// actual slot state; this only tracks which senders are active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub sender: String,
    pub created_at: NaiveDateTime,
    pub last_message: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl SessionRecord {
    pub fn new(sender: &str, now: NaiveDateTime) -> Self {
        Self {
            sender: sender.to_string(),
            created_at: now,
            last_message: None,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, message: &str, now: NaiveDateTime) {
        self.last_message = Some(message.to_string());
        self.updated_at = now;
    }
}
