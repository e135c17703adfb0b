use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::form::{self, FormStatus};
use crate::models::{
    ActionRequest, ActionResponse, FieldId, Tracker, TrackerEvent, YesNo,
};
use crate::state::AppState;

pub const VALIDATE_BOOKING_FORM: &str = "validate_booking_form";
pub const BOOKING_SUMMARY: &str = "action_booking_summary";
pub const STORE_BOOKING: &str = "action_store_booking";

const CONFIRMED: &str = "Great! Your booking is confirmed. Thank you for choosing our hotel.";
const DECLINED: &str =
    "No problem, I haven't made the booking. Let me know whenever you'd like to start again.";
const WRITE_WARNING: &str =
    "Note: we had trouble saving your booking details. Our staff will follow up to confirm them.";

// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

// POST /webhook
pub async fn run_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActionRequest>,
) -> Response {
    let sender = if req.tracker.sender_id.is_empty() {
        req.sender_id.clone().unwrap_or_default()
    } else {
        req.tracker.sender_id.clone()
    };

    tracing::info!(sender = %sender, action = %req.next_action, "running action");

    let response = match req.next_action.as_str() {
        VALIDATE_BOOKING_FORM => validate_booking_form(&req.tracker),
        BOOKING_SUMMARY => booking_summary(&req.tracker),
        STORE_BOOKING => store_booking(&state, &req.tracker),
        other => {
            tracing::warn!(action = %other, "unknown action requested");
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": format!("No registered action found for name '{other}'."),
                    "action_name": other,
                })),
            )
                .into_response();
        }
    };

    Json(response).into_response()
}

/// Raw tracker value for a form field, falling back to legacy slot names.
fn raw_slot(tracker: &Tracker, field: FieldId) -> Option<String> {
    tracker.slot_text(field.as_str()).or_else(|| match field {
        FieldId::GuestName => tracker.slot_text("name"),
        FieldId::NumGuests => tracker.slot_text("guests"),
        _ => None,
    })
}

fn validate_booking_form(tracker: &Tracker) -> ActionResponse {
    let requested = tracker.requested_slot().as_deref().and_then(FieldId::parse);
    let update = form::validate_slots(
        |f| raw_slot(tracker, f),
        requested,
        tracker.latest_message.text.as_deref(),
    );

    let mut response = ActionResponse::default();
    for (field, value) in update.updates {
        response.events.push(TrackerEvent::Slot {
            name: field.as_str().to_string(),
            value: value.map(|v| v.to_string()),
        });
    }
    for reprompt in update.reprompts {
        response.say(reprompt);
    }
    response
}

fn booking_summary(tracker: &Tracker) -> ActionResponse {
    let state = form::state_from_raw(|f| raw_slot(tracker, f));
    let mut response = ActionResponse::default();
    response.say(form::summarize(&state));
    response
}

fn confirmation_of(tracker: &Tracker) -> Option<YesNo> {
    match tracker.intent_name() {
        Some("affirm") => Some(YesNo::Yes),
        Some("deny") => Some(YesNo::No),
        _ => tracker
            .latest_message
            .text
            .as_deref()
            .and_then(form::confirmation),
    }
}

fn store_booking(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let form_state = form::state_from_raw(|f| raw_slot(tracker, f));
    let mut response = ActionResponse::default();

    if let FormStatus::Collecting { next } = form::status(&form_state) {
        response.say(next.question());
        return response;
    }

    match confirmation_of(tracker) {
        Some(YesNo::Yes) => {}
        Some(YesNo::No) => {
            tracing::info!(sender = %tracker.sender_id, "booking declined at confirmation");
            response.say(DECLINED);
            response.events.push(TrackerEvent::ResetSlots);
            return response;
        }
        None => {
            response.say(form::summarize(&form_state));
            return response;
        }
    }

    let record = match form::finalize(&form_state) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "finalize failed on a complete form");
            response.say(form::summarize(&form_state));
            return response;
        }
    };

    // The booking stands once the guest confirms, even if the write fails.
    response.say(CONFIRMED);
    if let Err(e) = state.recorder.append(&record) {
        tracing::error!(error = %e, sender = %tracker.sender_id, "failed to store booking");
        response.say(WRITE_WARNING);
    }
    response.events.push(TrackerEvent::ResetSlots);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(value: serde_json::Value) -> Tracker {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_raw_slot_reads_legacy_names() {
        let t = tracker(serde_json::json!({"slots": {"name": "ann lee", "guests": "2"}}));
        assert_eq!(raw_slot(&t, FieldId::GuestName).as_deref(), Some("ann lee"));
        assert_eq!(raw_slot(&t, FieldId::NumGuests).as_deref(), Some("2"));
    }

    #[test]
    fn test_validate_emits_slot_events_and_reprompts() {
        let t = tracker(serde_json::json!({
            "sender_id": "s1",
            "slots": {
                "requested_slot": "num_guests",
                "guest_name": "I want to book a room",
                "num_guests": "two",
            },
            "latest_message": {"text": "two"},
        }));

        let response = validate_booking_form(&t);
        assert_eq!(
            response.events,
            vec![
                TrackerEvent::Slot {
                    name: "guest_name".into(),
                    value: None
                },
                TrackerEvent::Slot {
                    name: "num_guests".into(),
                    value: Some("2".into())
                },
            ]
        );
        assert_eq!(response.responses.len(), 1);
    }

    #[test]
    fn test_confirmation_prefers_intent() {
        let t = tracker(serde_json::json!({
            "latest_message": {"text": "no", "intent": {"name": "affirm"}},
        }));
        assert_eq!(confirmation_of(&t), Some(YesNo::Yes));

        let t = tracker(serde_json::json!({"latest_message": {"text": "nope"}}));
        assert_eq!(confirmation_of(&t), Some(YesNo::No));
    }
}
