use chrono::{NaiveDateTime, Utc};

use super::normalize;
use super::validate::{validate, Validation};
use crate::models::{
    BookingFormState, BookingRecord, CanonicalValue, FieldId, PaymentMethod, RoomType, YesNo,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("booking form is incomplete, missing: {}", join_fields(.missing))]
    Incomplete { missing: Vec<FieldId> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Collecting { next: FieldId },
    Complete,
}

/// Slot updates produced for one user turn. A `None` value means the field
/// was rejected and must be asked again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotUpdate {
    pub updates: Vec<(FieldId, Option<CanonicalValue>)>,
    pub reprompts: Vec<&'static str>,
}

impl SlotUpdate {
    pub fn apply_to(&self, state: &mut BookingFormState) {
        for (field, value) in &self.updates {
            state.set(*field, value.clone());
        }
    }
}

fn reads_live_message(field: FieldId) -> bool {
    matches!(field, FieldId::Breakfast)
}

/// Raw value to validate for `field`. Fields that read the live message
/// prefer it over whatever the slot held from an earlier turn.
pub fn extract(field: FieldId, message: Option<&str>, existing: Option<&str>) -> Option<String> {
    let message = message.map(str::trim).filter(|m| !m.is_empty());
    if reads_live_message(field) {
        if let Some(m) = message {
            return Some(m.to_string());
        }
    }
    existing.map(str::to_string)
}

/// Validates every form field that has a raw value this turn, plus the
/// requested field when it reads the live message.
pub fn validate_slots<F>(
    raw_slot: F,
    requested: Option<FieldId>,
    latest_message: Option<&str>,
) -> SlotUpdate
where
    F: Fn(FieldId) -> Option<String>,
{
    let mut out = SlotUpdate::default();

    for field in FieldId::ALL {
        let existing = raw_slot(field);
        let raw = if requested == Some(field) {
            extract(field, latest_message, existing.as_deref())
        } else {
            existing
        };
        let Some(raw) = raw else {
            continue;
        };

        match validate(field, Some(&raw)) {
            Validation::Accepted(value) => {
                tracing::debug!(field = %field, value = %value, "slot accepted");
                out.updates.push((field, Some(value)));
            }
            Validation::Rejected { reprompt } => {
                tracing::debug!(field = %field, raw = %raw, "slot rejected");
                out.updates.push((field, None));
                out.reprompts.push(reprompt);
            }
        }
    }

    out
}

/// Builds form state from raw slot values; anything that fails validation is
/// left unfilled.
pub fn state_from_raw<F>(raw_slot: F) -> BookingFormState
where
    F: Fn(FieldId) -> Option<String>,
{
    let mut state = BookingFormState::new();
    validate_slots(raw_slot, None, None).apply_to(&mut state);
    state
}

pub fn next_field(state: &BookingFormState) -> Option<FieldId> {
    FieldId::ALL.into_iter().find(|f| !state.is_filled(*f))
}

pub fn status(state: &BookingFormState) -> FormStatus {
    match next_field(state) {
        Some(next) => FormStatus::Collecting { next },
        None => FormStatus::Complete,
    }
}

/// Recognizes the guest's answer to the booking summary.
pub fn confirmation(raw: &str) -> Option<YesNo> {
    normalize::yes_no_keywords(raw)
}

pub fn summarize(state: &BookingFormState) -> String {
    let mut out = String::from("Here is a summary of your booking:\n");
    for field in FieldId::ALL {
        let value = state
            .get(field)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not provided)".to_string());
        out.push_str(&format!("- {}: {}\n", field.label(), value));
    }
    out.push_str("Shall I confirm this booking? (yes/no)");
    out
}

pub fn finalize(state: &BookingFormState) -> Result<BookingRecord, FormError> {
    finalize_at(state, Utc::now().naive_utc())
}

pub fn finalize_at(
    state: &BookingFormState,
    created_at: NaiveDateTime,
) -> Result<BookingRecord, FormError> {
    let missing = state.missing();
    if !missing.is_empty() {
        return Err(FormError::Incomplete { missing });
    }

    let incomplete = |field| FormError::Incomplete {
        missing: vec![field],
    };
    let text = |field: FieldId| {
        state
            .get(field)
            .and_then(CanonicalValue::as_text)
            .map(str::to_string)
            .ok_or_else(|| incomplete(field))
    };

    let num_guests = match state.get(FieldId::NumGuests) {
        Some(CanonicalValue::Guests(n)) => *n,
        _ => return Err(incomplete(FieldId::NumGuests)),
    };
    let room_type: RoomType = match state.get(FieldId::RoomType) {
        Some(CanonicalValue::Room(r)) => *r,
        _ => return Err(incomplete(FieldId::RoomType)),
    };
    let breakfast = match state.get(FieldId::Breakfast) {
        Some(CanonicalValue::Answer(a)) => *a,
        _ => return Err(incomplete(FieldId::Breakfast)),
    };
    let payment_method: PaymentMethod = match state.get(FieldId::PaymentMethod) {
        Some(CanonicalValue::Payment(p)) => *p,
        _ => return Err(incomplete(FieldId::PaymentMethod)),
    };

    Ok(BookingRecord {
        guest_name: text(FieldId::GuestName)?,
        email: text(FieldId::Email)?,
        phone: text(FieldId::Phone)?,
        checkin_date: text(FieldId::CheckinDate)?,
        checkout_date: text(FieldId::CheckoutDate)?,
        num_guests,
        room_type,
        special_requests: text(FieldId::SpecialRequests)?,
        breakfast,
        payment_method,
        created_at,
    })
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(FieldId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn valid_raw() -> HashMap<FieldId, &'static str> {
        HashMap::from([
            (FieldId::GuestName, "john smith"),
            (FieldId::Email, "John@Example.com"),
            (FieldId::Phone, "+44 20 7946 0958"),
            (FieldId::CheckinDate, "25/12/2024"),
            (FieldId::CheckoutDate, "28/12/2024"),
            (FieldId::NumGuests, "two"),
            (FieldId::RoomType, "double please"),
            (FieldId::SpecialRequests, "none"),
            (FieldId::Breakfast, "yes"),
            (FieldId::PaymentMethod, "VISA card please"),
        ])
    }

    fn filled_state() -> BookingFormState {
        let raw = valid_raw();
        state_from_raw(|f| raw.get(&f).map(|s| s.to_string()))
    }

    #[test]
    fn test_extract_prefers_live_message_for_breakfast() {
        assert_eq!(
            extract(FieldId::Breakfast, Some("no thanks"), Some("yes")).as_deref(),
            Some("no thanks")
        );
        assert_eq!(
            extract(FieldId::Breakfast, Some("   "), Some("yes")).as_deref(),
            Some("yes")
        );
        assert_eq!(
            extract(FieldId::RoomType, Some("hello"), Some("suite")).as_deref(),
            Some("suite")
        );
        assert_eq!(extract(FieldId::Email, Some("a@b.io"), None), None);
    }

    #[test]
    fn test_validate_slots_reports_rejections() {
        let raw = HashMap::from([
            (FieldId::GuestName, "I want to book a room"),
            (FieldId::NumGuests, "two"),
        ]);
        let update = validate_slots(|f| raw.get(&f).map(|s| s.to_string()), None, None);

        assert_eq!(
            update.updates,
            vec![
                (FieldId::GuestName, None),
                (FieldId::NumGuests, Some(CanonicalValue::Guests(2))),
            ]
        );
        assert_eq!(update.reprompts.len(), 1);
    }

    #[test]
    fn test_validate_slots_reads_breakfast_from_message() {
        let update = validate_slots(|_| None, Some(FieldId::Breakfast), Some("yes please"));
        assert_eq!(
            update.updates,
            vec![(FieldId::Breakfast, Some(CanonicalValue::Answer(YesNo::Yes)))]
        );
        assert!(update.reprompts.is_empty());
    }

    #[test]
    fn test_next_field_and_status() {
        let mut state = BookingFormState::new();
        assert_eq!(status(&state), FormStatus::Collecting { next: FieldId::GuestName });

        state.set(FieldId::GuestName, Some(CanonicalValue::Text("Ann Lee".into())));
        assert_eq!(next_field(&state), Some(FieldId::Email));

        assert_eq!(status(&filled_state()), FormStatus::Complete);
    }

    #[test]
    fn test_summarize_lists_every_field() {
        let mut state = filled_state();
        state.set(FieldId::Phone, None);
        let summary = summarize(&state);

        assert!(summary.contains("- Guest Name: John Smith"));
        assert!(summary.contains("- Phone: (not provided)"));
        assert!(summary.contains("- Payment Method: Credit Card"));
        assert!(summary.ends_with("(yes/no)"));
    }

    #[test]
    fn test_finalize_incomplete() {
        let mut state = filled_state();
        state.set(FieldId::Email, None);
        state.set(FieldId::Breakfast, None);

        let err = finalize(&state).unwrap_err();
        assert_eq!(
            err,
            FormError::Incomplete {
                missing: vec![FieldId::Email, FieldId::Breakfast]
            }
        );
        assert!(err.to_string().contains("email, breakfast"));
    }

    #[test]
    fn test_finalize_complete() {
        let at = NaiveDateTime::parse_from_str("2024-11-16 13:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let record = finalize_at(&filled_state(), at).unwrap();

        assert_eq!(record.guest_name, "John Smith");
        assert_eq!(record.email, "john@example.com");
        assert_eq!(record.phone, "+44 20 7946 0958");
        assert_eq!(record.num_guests, 2);
        assert_eq!(record.room_type, RoomType::Double);
        assert_eq!(record.special_requests, "None");
        assert_eq!(record.breakfast, YesNo::Yes);
        assert_eq!(record.payment_method, PaymentMethod::CreditCard);
        assert_eq!(record.created_at, at);
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(confirmation("yes, book it"), Some(YesNo::Yes));
        assert_eq!(confirmation("nope"), Some(YesNo::No));
        assert_eq!(confirmation("hmm"), None);
    }
}
