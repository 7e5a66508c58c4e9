//! Form-style field handling: presence checks and text to number parsing
//! before anything reaches the calculator.

use super::error::InputError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric text field. Blank or unparseable text gives `None`.
///
/// A `.` is the decimal point. When there is no `.`, a single `,` is
/// accepted as the decimal separator (`1500,75`).
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let normalized = if !text.contains('.') && text.matches(',').count() == 1 {
        text.replace(',', ".")
    } else {
        text.to_string()
    };
    Decimal::from_str(&normalized).ok()
}

/// A field that must be present and numeric
pub fn required_amount(field: &'static str, text: Option<&str>) -> Result<Decimal, InputError> {
    let text = present(field, text)?;
    parse_amount(text).ok_or_else(|| InputError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// A field that falls back to zero when absent, blank or not a number
pub fn optional_amount(text: Option<&str>) -> Decimal {
    text.and_then(parse_amount).unwrap_or(Decimal::ZERO)
}

/// A selector that must be present and match one of the known options
pub fn required_choice<T, F>(
    field: &'static str,
    text: Option<&str>,
    parse: F,
    options: &[T],
) -> Result<T, InputError>
where
    F: Fn(&str) -> Option<T>,
    T: std::fmt::Display,
{
    let text = present(field, text)?;
    parse(text).ok_or_else(|| InputError::InvalidChoice {
        field,
        value: text.to_string(),
        expected: options
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// A text field that must be present and non-blank
pub fn required_text<'a>(field: &'static str, text: Option<&'a str>) -> Result<&'a str, InputError> {
    present(field, text)
}

fn present<'a>(field: &'static str, text: Option<&'a str>) -> Result<&'a str, InputError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(InputError::MissingField(field)),
    }
}
