use serde::{Deserialize, Serialize};

/// Callback from the Dialogue Engine asking the action server to run one action.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub slots: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

impl Tracker {
    /// Raw slot value as text; `null` and missing slots are `None`.
    pub fn slot_text(&self, name: &str) -> Option<String> {
        match self.slots.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Bool(true) => Some("yes".to_string()),
            serde_json::Value::Bool(false) => Some("no".to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn requested_slot(&self) -> Option<String> {
        self.slot_text("requested_slot")
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.latest_message
            .intent
            .as_ref()
            .and_then(|i| i.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackerEvent {
    Slot {
        name: String,
        value: Option<String>,
    },
    ResetSlots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotUtterance {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<TrackerEvent>,
    pub responses: Vec<BotUtterance>,
}

impl ActionResponse {
    pub fn say(&mut self, text: impl Into<String>) {
        self.responses.push(BotUtterance { text: text.into() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_text_handles_json_types() {
        let tracker: Tracker = serde_json::from_value(serde_json::json!({
            "sender_id": "abc",
            "slots": {"num_guests": 3, "breakfast": true, "email": null, "guest_name": "Ann Lee"},
        }))
        .unwrap();

        assert_eq!(tracker.slot_text("num_guests").as_deref(), Some("3"));
        assert_eq!(tracker.slot_text("breakfast").as_deref(), Some("yes"));
        assert_eq!(tracker.slot_text("email"), None);
        assert_eq!(tracker.slot_text("phone"), None);
        assert_eq!(tracker.slot_text("guest_name").as_deref(), Some("Ann Lee"));
    }

    #[test]
    fn test_slot_event_wire_format() {
        let event = TrackerEvent::Slot {
            name: "room_type".to_string(),
            value: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "slot", "name": "room_type", "value": null})
        );
        let json = serde_json::to_value(TrackerEvent::ResetSlots).unwrap();
        assert_eq!(json, serde_json::json!({"event": "reset_slots"}));
    }
}
