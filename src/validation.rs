use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BookError, BookResult};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+380\d{9}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Returns true iff `phone` is `+380` followed by exactly nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns true iff `email` looks like `local@domain.tld` with an alphabetic
/// top-level segment of at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parses a `day.month.year` birthday into a calendar date in the stored year.
/// The year must be written with four digits.
/// Returns None when the text has the wrong shape or names an impossible date.
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('.');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year_text = parts.next()?.trim();
    if year_text.len() != 4 || !year_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = year_text.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims and checks a phone number.
pub fn phone(value: &str) -> BookResult<String> {
    let trimmed = value.trim();
    if is_valid_phone(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(BookError::InvalidPhone(trimmed.to_string()))
    }
}

/// Trims and checks an email address.
pub fn email(value: &str) -> BookResult<String> {
    let trimmed = value.trim();
    if is_valid_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(BookError::InvalidEmail(trimmed.to_string()))
    }
}

/// Trims and checks that a birthday parses. The original text is kept,
/// not a normalized rendering of the date.
pub fn birthday(value: &str) -> BookResult<String> {
    let trimmed = value.trim();
    match parse_birthday(trimmed) {
        Some(_) => Ok(trimmed.to_string()),
        None => Err(BookError::InvalidBirthday(trimmed.to_string())),
    }
}
