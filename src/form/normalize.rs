//! Pure text-to-canonical mappings, one per field type.
//!
//! A normalizer returns `None` when no mapping applies; the validator turns
//! that into a rejection for the field being collected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{PaymentMethod, RoomType, YesNo};

const YES_WORDS: &[&str] = &[
    "y", "yes", "yeah", "yep", "sure", "affirm", "true", "ok", "okay",
];
const NO_WORDS: &[&str] = &["n", "no", "nope", "nah", "false"];

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

const NO_REQUEST_PHRASES: &[&str] = &[
    "none",
    "nothing",
    "no",
    "n/a",
    "na",
    "nope",
    "nil",
    "no thanks",
    "no thank you",
    "nothing special",
    "not really",
    "no requests",
    "no special requests",
];

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Exact match against the closed yes/no synonym sets.
pub fn yes_no(raw: &str) -> Option<YesNo> {
    let v = raw.trim().to_lowercase();
    if YES_WORDS.contains(&v.as_str()) {
        Some(YesNo::Yes)
    } else if NO_WORDS.contains(&v.as_str()) {
        Some(YesNo::No)
    } else {
        None
    }
}

/// Exact match first, then keyword membership over the words of the text.
/// Text carrying both a yes and a no keyword is ambiguous and maps to nothing.
pub fn yes_no_keywords(raw: &str) -> Option<YesNo> {
    if let Some(answer) = yes_no(raw) {
        return Some(answer);
    }
    let lower = raw.to_lowercase();
    let words = words(&lower);
    let has_yes = words.iter().any(|w| YES_WORDS.contains(w));
    let has_no = words.iter().any(|w| NO_WORDS.contains(w));
    match (has_yes, has_no) {
        (true, false) => Some(YesNo::Yes),
        (false, true) => Some(YesNo::No),
        _ => None,
    }
}

pub fn room_type(raw: &str) -> Option<RoomType> {
    let v = raw.to_lowercase();
    RoomType::ALL.into_iter().find(|r| v.contains(r.token()))
}

/// Spaces are ignored so "pay pal" and "credit  card" still match. Credit
/// tokens win over `debit`; a bare `card` falls back to credit.
pub fn payment_method(raw: &str) -> Option<PaymentMethod> {
    let v: String = raw.to_lowercase().split_whitespace().collect();
    if ["credit", "visa", "master"].iter().any(|t| v.contains(t)) {
        Some(PaymentMethod::CreditCard)
    } else if v.contains("debit") {
        Some(PaymentMethod::DebitCard)
    } else if v.contains("card") {
        Some(PaymentMethod::CreditCard)
    } else if v.contains("cash") {
        Some(PaymentMethod::Cash)
    } else if v.contains("paypal") {
        Some(PaymentMethod::Paypal)
    } else {
        None
    }
}

/// First run of digits, else the first number word (one..ten).
pub fn guest_count(raw: &str) -> Option<u32> {
    if let Some(m) = DIGITS.find(raw) {
        // digit runs too long for u32 are out of range anyway
        return Some(m.as_str().parse().unwrap_or(u32::MAX));
    }
    let lower = raw.to_lowercase();
    words(&lower).into_iter().find_map(|w| {
        NUMBER_WORDS
            .iter()
            .find(|(name, _)| *name == w)
            .map(|(_, n)| *n)
    })
}

pub fn person_name(raw: &str) -> Option<String> {
    non_empty(raw).map(|s| title_case(&s))
}

pub fn email(raw: &str) -> Option<String> {
    non_empty(raw).map(|s| s.to_lowercase())
}

/// Kept as typed apart from surrounding whitespace.
pub fn phone(raw: &str) -> Option<String> {
    trimmed(raw)
}

/// Dates are kept as typed; acceptance is pattern-only.
pub fn date(raw: &str) -> Option<String> {
    trimmed(raw)
}

/// Empty input and "nothing"-style answers become the literal `None`.
pub fn special_requests(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed
        .to_lowercase()
        .trim_end_matches(['.', '!'])
        .trim()
        .to_string();
    if lower.is_empty() || NO_REQUEST_PHRASES.contains(&lower.as_str()) {
        return "None".to_string();
    }
    capitalize(trimmed)
}

pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character upper-cased, the rest lower-cased. Only the first char of
/// a multi-char upper-case mapping is kept (`ß` gives `S`), so applying this
/// twice changes nothing.
pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            let mut out: String = f.to_uppercase().take(1).collect();
            out.push_str(&c.as_str().to_lowercase());
            out
        }
    }
}

fn trimmed(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

fn words(lower: &str) -> Vec<&str> {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_synonyms() {
        assert_eq!(yes_no("Yeah"), Some(YesNo::Yes));
        assert_eq!(yes_no(" OK "), Some(YesNo::Yes));
        assert_eq!(yes_no("nah"), Some(YesNo::No));
        assert_eq!(yes_no("maybe"), None);
        assert_eq!(yes_no(""), None);
    }

    #[test]
    fn test_yes_no_is_idempotent_on_display_values() {
        assert_eq!(yes_no(YesNo::Yes.as_str()), Some(YesNo::Yes));
        assert_eq!(yes_no(YesNo::No.as_str()), Some(YesNo::No));
    }

    #[test]
    fn test_yes_no_keywords() {
        assert_eq!(yes_no_keywords("yes please"), Some(YesNo::Yes));
        assert_eq!(yes_no_keywords("No, thank you."), Some(YesNo::No));
        assert_eq!(yes_no_keywords("yes and no"), None);
        assert_eq!(yes_no_keywords("what is included?"), None);
    }

    #[test]
    fn test_room_type_first_match_wins() {
        assert_eq!(room_type("A DOUBLE room"), Some(RoomType::Double));
        assert_eq!(room_type("single or suite"), Some(RoomType::Single));
        assert_eq!(room_type("Deluxe"), Some(RoomType::Deluxe));
        assert_eq!(room_type("penthouse"), None);
    }

    #[test]
    fn test_payment_method() {
        assert_eq!(payment_method("VISA card please"), Some(PaymentMethod::CreditCard));
        assert_eq!(payment_method("mastercard"), Some(PaymentMethod::CreditCard));
        assert_eq!(payment_method("debit card"), Some(PaymentMethod::DebitCard));
        assert_eq!(payment_method("Pay Pal"), Some(PaymentMethod::Paypal));
        assert_eq!(payment_method("cash on arrival"), Some(PaymentMethod::Cash));
        assert_eq!(payment_method("bitcoin"), None);
    }

    #[test]
    fn test_payment_method_credit_wins_over_debit() {
        assert_eq!(
            payment_method("credit card, not debit"),
            Some(PaymentMethod::CreditCard)
        );
        assert_eq!(payment_method("Debit Card"), Some(PaymentMethod::DebitCard));
        assert_eq!(payment_method("card"), Some(PaymentMethod::CreditCard));
    }

    #[test]
    fn test_payment_method_idempotent() {
        for method in [
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Cash,
            PaymentMethod::Paypal,
        ] {
            assert_eq!(payment_method(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_guest_count() {
        assert_eq!(guest_count("two"), Some(2));
        assert_eq!(guest_count("We are 4 adults"), Some(4));
        assert_eq!(guest_count("Ten of us"), Some(10));
        assert_eq!(guest_count("someone"), None);
        assert_eq!(guest_count("a few"), None);
    }

    #[test]
    fn test_guest_count_reads_ascii_digits_only() {
        assert_eq!(guest_count("٣"), None);
        assert_eq!(guest_count("٣ or 3"), Some(3));
    }

    #[test]
    fn test_special_requests() {
        assert_eq!(special_requests("none"), "None");
        assert_eq!(special_requests("No thanks."), "None");
        assert_eq!(special_requests("   "), "None");
        assert_eq!(special_requests("late CHECKOUT"), "Late checkout");
        assert_eq!(special_requests("Late checkout"), "Late checkout");
    }

    #[test]
    fn test_special_requests_stable_for_expanding_uppercase() {
        let once = special_requests("ßauna access");
        assert_eq!(once, "Sauna access");
        assert_eq!(special_requests(&once), once);
    }

    #[test]
    fn test_phone_and_date_keep_inner_spacing() {
        assert_eq!(phone("  +1  555   123 4567 ").as_deref(), Some("+1  555   123 4567"));
        assert_eq!(date(" 25th   December ").as_deref(), Some("25th   December"));
        assert_eq!(phone("   "), None);
        assert_eq!(date(""), None);
    }

    #[test]
    fn test_person_name_title_cases() {
        assert_eq!(person_name("  john   SMITH ").as_deref(), Some("John Smith"));
        assert_eq!(person_name("   "), None);
    }
}
