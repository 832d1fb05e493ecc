//! Pure field validators for user-supplied text input.
//!
//! Each validator checks a single field and either returns the parsed
//! value (parse, don't re-validate downstream) or an
//! [`Error::Validation`] carrying the user-facing reason. Validators are
//! stateless; callers surface the message next to the offending field.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

// Pattern literals are known-good, compilation cannot fail.
#[allow(clippy::unwrap_used)]
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9]\d*)(\.\d{1,2})?$").unwrap());

#[allow(clippy::unwrap_used)]
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap());

#[allow(clippy::unwrap_used)]
static CATEGORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$").unwrap());

/// Validates a transaction description.
///
/// Fails when empty, when it carries leading/trailing whitespace, or when
/// a word token immediately repeats (case-insensitive): `"coffee coffee
/// shop"` fails, `"coffee shop coffee"` passes.
pub fn validate_description(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation("Description is required"));
    }
    if value.trim() != value {
        return Err(Error::validation("No leading/trailing spaces allowed"));
    }
    if has_adjacent_duplicate_word(value) {
        return Err(Error::validation("Duplicate words detected"));
    }
    Ok(())
}

/// Validates and parses a raw amount string.
///
/// Accepts `integer` or `integer.fraction` with 1-2 fractional digits and
/// no leading zeros (the lone value `0` is well-formed but rejected as
/// not greater than zero).
pub fn validate_amount(value: &str) -> Result<Decimal> {
    if value.is_empty() {
        return Err(Error::validation("Amount is required"));
    }
    if !AMOUNT_PATTERN.is_match(value) {
        return Err(Error::validation("Invalid amount format (e.g., 12.50)"));
    }
    let amount = Decimal::from_str(value)
        .map_err(|_| Error::validation("Invalid amount format (e.g., 12.50)"))?;
    if amount.is_zero() {
        return Err(Error::validation("Amount must be greater than 0"));
    }
    Ok(amount)
}

/// Validates and parses a raw `YYYY-MM-DD` date string.
///
/// The fixed-width pattern bounds month and day; the calendar round-trip
/// catches impossible dates such as `2023-02-30`.
pub fn validate_date(value: &str) -> Result<NaiveDate> {
    if value.is_empty() {
        return Err(Error::validation("Date is required"));
    }
    if !DATE_PATTERN.is_match(value) {
        return Err(Error::validation("Invalid date format (YYYY-MM-DD)"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| Error::validation("Invalid date"))
}

/// Validates a category chosen from the select list. Only emptiness is
/// checked here; the list itself constrains the value.
pub fn validate_category(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation("Category is required"));
    }
    Ok(())
}

/// Validates a free-text category name being added to the settings list.
///
/// Beyond the select-path check, the name must match the
/// letters/spaces/hyphens word pattern and must not already exist
/// (case-sensitive, matching the list's own uniqueness rule).
pub fn validate_new_category(value: &str, existing: &[String]) -> Result<()> {
    validate_category(value)?;
    if !CATEGORY_PATTERN.is_match(value) {
        return Err(Error::validation(
            "Category names may only contain letters, spaces, and hyphens",
        ));
    }
    if existing.iter().any(|c| c == value) {
        return Err(Error::validation("Category already exists"));
    }
    Ok(())
}

fn word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn leading_word_run(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !word_char(*c))
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

fn trailing_word_run(s: &str) -> &str {
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| word_char(*c))
        .last()
        .map_or(s.len(), |(i, _)| i);
    &s[start..]
}

/// A word immediately repeats when the trailing word run of one
/// whitespace token equals the leading word run of the next,
/// case-insensitively. "coffee coffee," repeats; "coffee, coffee" does
/// not, because the comma separates the first word from the whitespace.
fn has_adjacent_duplicate_word(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.windows(2).any(|pair| {
        // The repeat must sit directly across the whitespace, so the
        // first token has to end in word characters.
        let tail = trailing_word_run(pair[0]);
        if tail.is_empty() {
            return false;
        }
        let head = leading_word_run(pair[1]);
        !head.is_empty() && tail.to_lowercase() == head.to_lowercase()
    })
}
