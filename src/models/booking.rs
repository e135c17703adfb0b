use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CanonicalValue, FieldId, PaymentMethod, RoomType, YesNo};

/// Slots of one in-progress booking conversation. Only canonical values are
/// stored; an absent key is an unfilled or rejected slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingFormState {
    slots: BTreeMap<FieldId, CanonicalValue>,
}

impl BookingFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&CanonicalValue> {
        self.slots.get(&field)
    }

    /// `None` clears the slot.
    pub fn set(&mut self, field: FieldId, value: Option<CanonicalValue>) {
        match value {
            Some(v) => {
                self.slots.insert(field, v);
            }
            None => {
                self.slots.remove(&field);
            }
        }
    }

    pub fn is_filled(&self, field: FieldId) -> bool {
        self.slots.contains_key(&field)
    }

    pub fn missing(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub num_guests: u32,
    pub room_type: RoomType,
    pub special_requests: String,
    pub breakfast: YesNo,
    pub payment_method: PaymentMethod,
    pub created_at: NaiveDateTime,
}

impl BookingRecord {
    pub fn value_of(&self, field: FieldId) -> String {
        match field {
            FieldId::GuestName => self.guest_name.clone(),
            FieldId::Email => self.email.clone(),
            FieldId::Phone => self.phone.clone(),
            FieldId::CheckinDate => self.checkin_date.clone(),
            FieldId::CheckoutDate => self.checkout_date.clone(),
            FieldId::NumGuests => self.num_guests.to_string(),
            FieldId::RoomType => self.room_type.as_str().to_string(),
            FieldId::SpecialRequests => self.special_requests.clone(),
            FieldId::Breakfast => self.breakfast.as_str().to_string(),
            FieldId::PaymentMethod => self.payment_method.as_str().to_string(),
        }
    }

    /// `(label, display value)` for every field, in form order.
    pub fn labelled_values(&self) -> Vec<(&'static str, String)> {
        FieldId::ALL
            .iter()
            .map(|f| (f.label(), self.value_of(*f)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_none_clears_slot() {
        let mut state = BookingFormState::new();
        state.set(FieldId::NumGuests, Some(CanonicalValue::Guests(3)));
        assert!(state.is_filled(FieldId::NumGuests));

        state.set(FieldId::NumGuests, None);
        assert!(!state.is_filled(FieldId::NumGuests));
        assert_eq!(state.missing().len(), FieldId::ALL.len());
    }

    #[test]
    fn test_missing_keeps_form_order() {
        let mut state = BookingFormState::new();
        state.set(FieldId::GuestName, Some(CanonicalValue::Text("Ann Lee".into())));
        state.set(FieldId::Phone, Some(CanonicalValue::Text("5551234".into())));

        let missing = state.missing();
        assert_eq!(missing.first(), Some(&FieldId::Email));
        assert!(!missing.contains(&FieldId::Phone));
        assert_eq!(missing.len(), 8);
    }
}
