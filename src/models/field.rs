use serde::{Deserialize, Serialize};

/// One slot of the booking form. Declaration order is the order the form asks
/// for fields and the order lines appear in summaries and stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    GuestName,
    Email,
    Phone,
    CheckinDate,
    CheckoutDate,
    NumGuests,
    RoomType,
    SpecialRequests,
    Breakfast,
    PaymentMethod,
}

impl FieldId {
    pub const ALL: [FieldId; 10] = [
        FieldId::GuestName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::CheckinDate,
        FieldId::CheckoutDate,
        FieldId::NumGuests,
        FieldId::RoomType,
        FieldId::SpecialRequests,
        FieldId::Breakfast,
        FieldId::PaymentMethod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::GuestName => "guest_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::CheckinDate => "checkin_date",
            FieldId::CheckoutDate => "checkout_date",
            FieldId::NumGuests => "num_guests",
            FieldId::RoomType => "room_type",
            FieldId::SpecialRequests => "special_requests",
            FieldId::Breakfast => "breakfast",
            FieldId::PaymentMethod => "payment_method",
        }
    }

    /// Accepts the slot names used by older form definitions (`name`, `guests`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "guest_name" | "name" => Some(FieldId::GuestName),
            "email" => Some(FieldId::Email),
            "phone" => Some(FieldId::Phone),
            "checkin_date" => Some(FieldId::CheckinDate),
            "checkout_date" => Some(FieldId::CheckoutDate),
            "num_guests" | "guests" => Some(FieldId::NumGuests),
            "room_type" => Some(FieldId::RoomType),
            "special_requests" => Some(FieldId::SpecialRequests),
            "breakfast" => Some(FieldId::Breakfast),
            "payment_method" => Some(FieldId::PaymentMethod),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::GuestName => "Guest Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::CheckinDate => "Check-in Date",
            FieldId::CheckoutDate => "Check-out Date",
            FieldId::NumGuests => "Number of Guests",
            FieldId::RoomType => "Room Type",
            FieldId::SpecialRequests => "Special Requests",
            FieldId::Breakfast => "Breakfast",
            FieldId::PaymentMethod => "Payment Method",
        }
    }

    /// Question used when the form first asks for this field.
    pub fn question(&self) -> &'static str {
        match self {
            FieldId::GuestName => "May I have your full name, please?",
            FieldId::Email => "What is your email address?",
            FieldId::Phone => "What phone number can we reach you on?",
            FieldId::CheckinDate => "What is your check-in date?",
            FieldId::CheckoutDate => "And your check-out date?",
            FieldId::NumGuests => "How many guests will be staying?",
            FieldId::RoomType => "Which room type would you like: single, double, suite or deluxe?",
            FieldId::SpecialRequests => "Do you have any special requests?",
            FieldId::Breakfast => "Would you like breakfast included?",
            FieldId::PaymentMethod => {
                "How would you like to pay: credit card, debit card, cash or PayPal?"
            }
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_slot_names() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_parse_legacy_aliases() {
        assert_eq!(FieldId::parse("name"), Some(FieldId::GuestName));
        assert_eq!(FieldId::parse("guests"), Some(FieldId::NumGuests));
        assert_eq!(FieldId::parse("requested_slot"), None);
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = FieldId::ALL;
        sorted.sort();
        assert_eq!(sorted, FieldId::ALL);
    }
}
