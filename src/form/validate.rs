//! Per-field accept/reject rules.
//!
//! Each field has one entry in [`RULES`]: a normalizer producing a candidate
//! canonical value, an acceptance check on that value, and the fixed reprompt
//! used when either step fails. Validation is total: every input yields
//! exactly one of an accepted value or a reprompt.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize;
use crate::models::{CanonicalValue, FieldId};

pub const MAX_SPECIAL_REQUEST_CHARS: usize = 200;
pub const MAX_GUESTS: u32 = 10;

const NAME_BLOCKLIST: &[&str] = &[
    "want",
    "need",
    "book",
    "booking",
    "room",
    "hotel",
    "reservation",
    "reserve",
];

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

const MONTHS: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";
const WEEKDAYS: &str =
    r"(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|wed|thu|fri|sat|sun)";

static CHECKIN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}\b".to_string(),
        r"\b\d{4}-\d{1,2}-\d{1,2}\b".to_string(),
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTHS}\b"),
        format!(r"\b{MONTHS}\s+\d{{1,2}}(?:st|nd|rd|th)?\b"),
        r"\b(?:today|tonight|tomorrow)\b".to_string(),
        format!(r"\bnext\s+(?:week|weekend|month|{WEEKDAYS})\b"),
        format!(r"\bthis\s+(?:weekend|{WEEKDAYS})\b"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CHECKOUT_EXTRA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bin\s+(?:\d+|one|two|three|four|five|six|seven|eight|nine|ten|a)\s+(?:days?|nights?|weeks?)\b",
        r"\bday\s+after\s+tomorrow\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Outcome of validating one raw value for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Accepted(CanonicalValue),
    Rejected { reprompt: &'static str },
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted(_))
    }

    /// `(value, reprompt)` with exactly one side set.
    pub fn into_slot(self) -> (Option<CanonicalValue>, Option<&'static str>) {
        match self {
            Validation::Accepted(v) => (Some(v), None),
            Validation::Rejected { reprompt } => (None, Some(reprompt)),
        }
    }
}

pub struct FieldRule {
    pub field: FieldId,
    pub normalize: fn(&str) -> Option<CanonicalValue>,
    pub accept: fn(&CanonicalValue) -> bool,
    pub reprompt: &'static str,
}

pub static RULES: [FieldRule; 10] = [
    FieldRule {
        field: FieldId::GuestName,
        normalize: |raw| normalize::person_name(raw).map(CanonicalValue::Text),
        accept: accept_name,
        reprompt: "Please tell me your full name (first and last name, letters only).",
    },
    FieldRule {
        field: FieldId::Email,
        normalize: |raw| normalize::email(raw).map(CanonicalValue::Text),
        accept: |v| v.as_text().is_some_and(|s| EMAIL_RE.is_match(s)),
        reprompt: "That doesn't look like a valid email address. Please use the format name@example.com.",
    },
    FieldRule {
        field: FieldId::Phone,
        normalize: |raw| normalize::phone(raw).map(CanonicalValue::Text),
        accept: accept_phone,
        reprompt: "Please provide a valid phone number with 7 to 15 digits, e.g. +1 555 123 4567.",
    },
    FieldRule {
        field: FieldId::CheckinDate,
        normalize: |raw| normalize::date(raw).map(CanonicalValue::Text),
        accept: |v| v.as_text().is_some_and(is_checkin_date),
        reprompt: "Please give a check-in date like 25/12/2024, 25th December, December 25th or tomorrow.",
    },
    FieldRule {
        field: FieldId::CheckoutDate,
        normalize: |raw| normalize::date(raw).map(CanonicalValue::Text),
        accept: |v| v.as_text().is_some_and(is_checkout_date),
        reprompt: "Please give a check-out date like 28/12/2024, 28th December or in 3 days.",
    },
    FieldRule {
        field: FieldId::NumGuests,
        normalize: |raw| normalize::guest_count(raw).map(CanonicalValue::Guests),
        accept: |v| matches!(v, CanonicalValue::Guests(n) if (1..=MAX_GUESTS).contains(n)),
        reprompt: "How many guests? Please enter a number between 1 and 10 (e.g. 2 or two).",
    },
    FieldRule {
        field: FieldId::RoomType,
        normalize: |raw| normalize::room_type(raw).map(CanonicalValue::Room),
        accept: |v| matches!(v, CanonicalValue::Room(_)),
        reprompt: "Please choose a room type: single, double, suite or deluxe.",
    },
    FieldRule {
        field: FieldId::SpecialRequests,
        normalize: |raw| Some(CanonicalValue::Text(normalize::special_requests(raw))),
        accept: |v| {
            v.as_text()
                .is_some_and(|s| s.chars().count() <= MAX_SPECIAL_REQUEST_CHARS)
        },
        reprompt: "Special requests must be 200 characters or fewer. Please shorten it, or say 'none'.",
    },
    FieldRule {
        field: FieldId::Breakfast,
        normalize: |raw| normalize::yes_no_keywords(raw).map(CanonicalValue::Answer),
        accept: |v| matches!(v, CanonicalValue::Answer(_)),
        reprompt: "Please answer with yes or no for breakfast.",
    },
    FieldRule {
        field: FieldId::PaymentMethod,
        normalize: |raw| normalize::payment_method(raw).map(CanonicalValue::Payment),
        accept: |v| matches!(v, CanonicalValue::Payment(_)),
        reprompt: "Payment can be credit card, debit card, cash or PayPal.",
    },
];

pub fn rule(field: FieldId) -> &'static FieldRule {
    // RULES is indexed in FieldId::ALL order
    &RULES[field as usize]
}

/// A missing value is validated as empty text, so it takes the same path as
/// any other unusable input.
pub fn validate(field: FieldId, raw: Option<&str>) -> Validation {
    let rule = rule(field);
    let raw = raw.unwrap_or("");
    match (rule.normalize)(raw) {
        Some(value) if (rule.accept)(&value) => Validation::Accepted(value),
        _ => Validation::Rejected {
            reprompt: rule.reprompt,
        },
    }
}

fn accept_name(value: &CanonicalValue) -> bool {
    let Some(name) = value.as_text() else {
        return false;
    };
    if name.chars().count() < 3 || !NAME_RE.is_match(name) {
        return false;
    }
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    (2..=4).contains(&words.len()) && !words.iter().any(|w| NAME_BLOCKLIST.contains(w))
}

fn accept_phone(value: &CanonicalValue) -> bool {
    value.as_text().is_some_and(|s| {
        let digits = PHONE_STRIP_RE.replace_all(s, "");
        PHONE_RE.is_match(&digits)
    })
}

fn is_checkin_date(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    CHECKIN_PATTERNS.iter().any(|re| re.is_match(&lower))
}

fn is_checkout_date(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    is_checkin_date(&lower) || CHECKOUT_EXTRA_PATTERNS.iter().any(|re| re.is_match(&lower))
}
