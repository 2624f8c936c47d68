//! Birthday field.

use super::Field;
use crate::error::{BookResult, ValidationError};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format matching the stored `DD.MM.YYYY` string.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A birthday in `DD.MM.YYYY` form, or the empty string for "no birthday".
///
/// The original string is stored verbatim; the parsed date is kept alongside
/// it and always agrees with it.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::new("13.01.1988").unwrap();
/// assert_eq!(birthday.value(), "13.01.1988");
/// assert!(Birthday::new("").unwrap().date().is_none());
/// assert!(Birthday::new("31.02.1988").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: Option<NaiveDate>,
}

impl Birthday {
    /// Create a new Birthday. The empty string means no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongDateFormat` if a non-empty value is not
    /// a real calendar date in `DD.MM.YYYY` form.
    pub fn new(birthday: impl Into<String>) -> BookResult<Self> {
        let value = birthday.into();
        let date = Self::parse(&value)?;
        Ok(Self { value, date })
    }

    fn parse(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
        if value.is_empty() {
            return Ok(None);
        }
        if !BIRTHDAY_SHAPE.is_match(value) {
            return Err(ValidationError::WrongDateFormat(value.to_string()));
        }
        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            // chrono allows the proleptic year 0; years start at 1 here
            Ok(date) if date.year() >= 1 => Ok(Some(date)),
            _ => Err(ValidationError::WrongDateFormat(value.to_string())),
        }
    }

    /// The parsed date, if a birthday is recorded.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Whether a birthday is recorded.
    pub fn is_set(&self) -> bool {
        self.date.is_some()
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// Returns `Ok(None)` when no birthday is recorded.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BirthdayNotInYear` for a 29 February birthday
    /// anchored to a non-leap year.
    pub fn in_year(&self, year: i32) -> Result<Option<NaiveDate>, ValidationError> {
        let Some(date) = self.date else {
            return Ok(None);
        };
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .map(Some)
            .ok_or_else(|| ValidationError::BirthdayNotInYear {
                birthday: self.value.clone(),
                year,
            })
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) -> BookResult<()> {
        self.date = Self::parse(&value)?;
        self.value = value;
        Ok(())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    #[test]
    fn test_birthday_valid_echoes_string() {
        let birthday = Birthday::new("13.01.1988").unwrap();
        assert_eq!(birthday.value(), "13.01.1988");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1988, 1, 13));
        assert!(birthday.is_set());
    }

    #[test]
    fn test_birthday_empty_means_none() {
        let birthday = Birthday::new("").unwrap();
        assert_eq!(birthday.value(), "");
        assert!(birthday.date().is_none());
        assert!(!birthday.is_set());
        assert_eq!(birthday, Birthday::default());
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("1988-01-13").is_err());
        assert!(Birthday::new("13/01/1988").is_err());
        assert!(Birthday::new("1.1.1988").is_err());
        assert!(Birthday::new("13.01.88").is_err());
        assert!(Birthday::new("32.01.1988").is_err());
        assert!(Birthday::new("13.13.1988").is_err());
        assert!(Birthday::new("31.04.1988").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new(" 13.01.1988").is_err());
        assert!(Birthday::new("01.01.0000").is_err());
        assert!(Birthday::new("29.02.2024").is_ok());
        assert!(Birthday::new("01.01.0001").is_ok());
    }

    #[test]
    fn test_birthday_error_kind() {
        match Birthday::new("not a date") {
            Err(BookError::Validation(ValidationError::WrongDateFormat(value))) => {
                assert_eq!(value, "not a date");
            }
            other => panic!("Expected WrongDateFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_birthday_set_value_keeps_previous_on_error() {
        let mut birthday = Birthday::new("13.01.1988").unwrap();
        assert!(birthday.set_value("13.1.1988".to_string()).is_err());
        assert_eq!(birthday.value(), "13.01.1988");

        birthday.set_value(String::new()).unwrap();
        assert!(!birthday.is_set());
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::new("13.01.1988").unwrap();
        assert_eq!(
            birthday.in_year(2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 13)
        );
        assert_eq!(Birthday::default().in_year(2024).unwrap(), None);
    }

    #[test]
    fn test_birthday_leap_day_in_non_leap_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert!(birthday.in_year(2024).unwrap().is_some());
        assert_eq!(
            birthday.in_year(2023),
            Err(ValidationError::BirthdayNotInYear {
                birthday: "29.02.2000".to_string(),
                year: 2023,
            })
        );
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"13.01.1988\"").unwrap();
        assert_eq!(birthday.value(), "13.01.1988");

        let result: Result<Birthday, _> = serde_json::from_str("\"1988-01-13\"");
        assert!(result.is_err());
    }
}
