//! Cross-cutting validation rules
//!
//! Pure predicates over user input. None of them panic or return errors;
//! malformed input simply yields `false` (or an empty list).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate, TimeDelta};
use regex::Regex;

/// Default minimum password length
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Default vaccination validity window, in (30-day) months
pub const DEFAULT_VACCINE_VALID_MONTHS: u32 = 12;

/// Accepted weight range in kilograms (inclusive)
pub const MIN_WEIGHT_KG: f64 = 0.1;
pub const MAX_WEIGHT_KG: f64 = 100.0;

/// Catch-all entry of [`KNOWN_BREEDS`]
pub const OTHER_BREED: &str = "その他";

/// Breeds accepted on dog profiles
pub const KNOWN_BREEDS: &[&str] = &[
    "柴犬",
    "トイプードル",
    "チワワ",
    "ミニチュアダックスフンド",
    "ポメラニアン",
    "マルチーズ",
    "ヨークシャーテリア",
    "パピヨン",
    "ボーダーコリー",
    "ラブラドールレトリバー",
    "ゴールデンレトリバー",
    "シベリアンハスキー",
    "ドーベルマン",
    "ジャーマンシェパード",
    OTHER_BREED,
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("invalid email pattern")
});

// Japanese numbers, with or without hyphens
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+81|0)[0-9-]{9,}$").expect("invalid phone pattern"));

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("invalid hashtag pattern"));

/// `local@domain.tld` with an ASCII local part and a 2+ letter TLD
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least `min_length` characters, one digit and one letter
pub fn validate_password(password: &str, min_length: usize) -> bool {
    if password.chars().count() < min_length {
        return false;
    }

    let has_digit = password.chars().any(char::is_numeric);
    let has_letter = password.chars().any(char::is_alphabetic);

    has_digit && has_letter
}

/// `+81` or `0` prefix followed by at least nine digits/hyphens
pub fn validate_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_breed(breed: &str) -> bool {
    KNOWN_BREEDS.contains(&breed)
}

/// Parse a weight such as `"5.2kg"` or `"12"` into kilograms
pub fn parse_weight_kg(weight: &str) -> Option<f64> {
    let trimmed = weight.trim();
    let number = trimmed
        .strip_suffix("kg")
        .or_else(|| trimmed.strip_suffix("KG"))
        .or_else(|| trimmed.strip_suffix("Kg"))
        .unwrap_or(trimmed)
        .trim();

    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Weight must parse and fall within [`MIN_WEIGHT_KG`, `MAX_WEIGHT_KG`]
pub fn validate_weight(weight: &str) -> bool {
    parse_weight_kg(weight).is_some_and(|kg| (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&kg))
}

/// Every distinct `#word` in `text`
///
/// Returned sorted; callers must not rely on the order.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Vaccination counts as current for `months_valid * 30` days
pub fn is_vaccine_up_to_date(vaccinated_on: NaiveDate, months_valid: u32) -> bool {
    is_vaccine_up_to_date_on(vaccinated_on, months_valid, Local::now().date_naive())
}

/// Same as [`is_vaccine_up_to_date`] with an explicit "today"
///
/// A window reaching past the earliest representable date covers everything.
pub fn is_vaccine_up_to_date_on(vaccinated_on: NaiveDate, months_valid: u32, today: NaiveDate) -> bool {
    TimeDelta::try_days(i64::from(months_valid) * 30)
        .and_then(|window| today.checked_sub_signed(window))
        .is_none_or(|cutoff| vaccinated_on >= cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("user.name+tag@example.co.jp"));
        assert!(validate_email("USER_1%x@sub-domain.example.org"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!validate_email(""));
        assert!(!validate_email("userexample.com"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@example.c"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("ユーザー@example.com"));
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("abcdefg1", 8));
        assert!(!validate_password("abcdefgh", 8)); // no digit
        assert!(!validate_password("12345678", 8)); // no letter
        assert!(!validate_password("", 8));
    }

    #[test]
    fn test_password_shorter_than_minimum_always_rejected() {
        for candidate in ["a1", "abc123", "Zz9!Zz9", "パス1"] {
            assert!(!validate_password(candidate, 8), "{candidate}");
        }
        // Minimum is configurable
        assert!(validate_password("ab12", 4));
        assert!(!validate_password("abcdefghij1", 12));
    }

    #[test]
    fn test_phone_number() {
        assert!(validate_phone_number("09012345678"));
        assert!(validate_phone_number("090-1234-5678"));
        assert!(validate_phone_number("+819012345678"));
        assert!(!validate_phone_number("9012345678"));
        assert!(!validate_phone_number("0901234"));
        assert!(!validate_phone_number("090-1234-567a"));
        assert!(!validate_phone_number(""));
    }

    #[test]
    fn test_breed() {
        assert!(validate_breed("柴犬"));
        assert!(validate_breed(OTHER_BREED));
        assert!(!validate_breed("ミックス"));
        assert!(!validate_breed(""));
    }

    #[test]
    fn test_weight() {
        assert!(validate_weight("5kg"));
        assert!(validate_weight("5.5 kg"));
        assert!(validate_weight("0.1"));
        assert!(validate_weight("100"));
        assert!(!validate_weight("0.05kg"));
        assert!(!validate_weight("100.1"));
        assert!(!validate_weight("heavy"));
        assert!(!validate_weight(""));
        assert!(!validate_weight("NaN"));
        assert_eq!(parse_weight_kg(" 12.5kg "), Some(12.5));
    }

    #[test]
    fn test_extract_hashtags_dedup() {
        let tags = extract_hashtags("朝の散歩 #柴犬 #walk #walk and #dog_run!");
        assert_eq!(tags, vec!["#dog_run", "#walk", "#柴犬"]);
        assert!(extract_hashtags("no tags # here").is_empty());
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn test_vaccine_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let recent = today - TimeDelta::days(100);
        let edge = today - TimeDelta::days(360);
        let stale = today - TimeDelta::days(361);

        assert!(is_vaccine_up_to_date_on(recent, 12, today));
        assert!(is_vaccine_up_to_date_on(edge, 12, today));
        assert!(!is_vaccine_up_to_date_on(stale, 12, today));
        assert!(!is_vaccine_up_to_date_on(recent, 3, today));
    }

    #[test]
    fn test_vaccine_huge_window_does_not_overflow() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let ancient = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert!(is_vaccine_up_to_date_on(ancient, u32::MAX, today));
        assert!(is_vaccine_up_to_date_on(NaiveDate::MIN, 10_000_000, today));
    }

    #[test]
    fn test_vaccine_today_is_current() {
        let today = Local::now().date_naive();
        assert!(is_vaccine_up_to_date(today, DEFAULT_VACCINE_VALID_MONTHS));
    }
}
