use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
            RoomType::Deluxe => "Deluxe",
        }
    }

    /// Lower-case token searched for in free text.
    pub fn token(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Suite => "suite",
            RoomType::Deluxe => "deluxe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    Cash,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Paypal => "Paypal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// A slot value that has passed normalization and its field's acceptance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Guests(u32),
    Room(RoomType),
    Payment(PaymentMethod),
    Answer(YesNo),
    Text(String),
}

impl CanonicalValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CanonicalValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Text(s) => f.write_str(s),
            CanonicalValue::Guests(n) => write!(f, "{n}"),
            CanonicalValue::Room(r) => f.write_str(r.as_str()),
            CanonicalValue::Payment(p) => f.write_str(p.as_str()),
            CanonicalValue::Answer(a) => f.write_str(a.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(CanonicalValue::Guests(2).to_string(), "2");
        assert_eq!(CanonicalValue::Room(RoomType::Suite).to_string(), "Suite");
        assert_eq!(
            CanonicalValue::Payment(PaymentMethod::CreditCard).to_string(),
            "Credit Card"
        );
        assert_eq!(CanonicalValue::Answer(YesNo::No).to_string(), "No");
    }

    #[test]
    fn test_serializes_as_display_strings() {
        let json = serde_json::to_string(&PaymentMethod::DebitCard).unwrap();
        assert_eq!(json, "\"Debit Card\"");
        let json = serde_json::to_string(&CanonicalValue::Room(RoomType::Double)).unwrap();
        assert_eq!(json, "\"Double\"");
    }
}
