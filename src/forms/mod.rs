//! Typed form definitions backing the dashboard dialogs.
//!
//! Each form is validated once, as part of its conversion into a domain
//! payload. Numeric inputs are free text and fail soft to zero.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use validator::ValidationErrors;

pub mod appointment;
pub mod catalog;
pub mod client;
pub mod feedback;
pub mod product;
pub mod team;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid date")]
    InvalidDate,

    #[error("invalid time")]
    InvalidTime,

    #[error("invalid rating")]
    InvalidRating,

    #[error("invalid status")]
    InvalidStatus,

    #[error("invalid percentage")]
    InvalidPercentage,
}

/// Parses a number typed into a form, falling back to zero.
///
/// Accepts a decimal comma (`25,90`) as typed on Brazilian keyboards.
pub fn parse_number_or_zero<T>(raw: &str) -> T
where
    T: FromStr + Default,
{
    raw.trim().replace(',', ".").parse().unwrap_or_default()
}

/// Splits a comma separated list, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an ISO date; blank input means "no date".
pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    parse_optional_date(raw)?.ok_or(FormError::InvalidDate)
}

/// Parses `HH:MM` as entered in the booking dialog.
pub fn parse_time(raw: &str) -> Result<NaiveTime, FormError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| FormError::InvalidTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_fail_soft_to_zero() {
        assert_eq!(parse_number_or_zero::<u32>("15"), 15);
        assert_eq!(parse_number_or_zero::<u32>(" 7 "), 7);
        assert_eq!(parse_number_or_zero::<u32>("abc"), 0);
        assert_eq!(parse_number_or_zero::<u32>(""), 0);
        assert_eq!(parse_number_or_zero::<u32>("-3"), 0);
        assert_eq!(parse_number_or_zero::<f64>("25,90"), 25.9);
        assert_eq!(parse_number_or_zero::<f64>("18.5"), 18.5);
    }

    #[test]
    fn lists_drop_blank_items() {
        assert_eq!(split_list("Degradê, , Barba ,"), vec!["Degradê", "Barba"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn dates_and_times_parse() {
        assert_eq!(parse_optional_date("  ").unwrap(), None);
        assert_eq!(
            parse_date("2023-06-12").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()
        );
        assert!(matches!(parse_date("12/06/2023"), Err(FormError::InvalidDate)));
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(matches!(parse_time("25:00"), Err(FormError::InvalidTime)));
    }
}
