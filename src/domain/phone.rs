//! Phone field.

use super::Field;
use crate::error::{BookResult, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a phone number.
pub const PHONE_LENGTH: usize = 10;

/// A phone number of exactly ten decimal digits, no separators.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.value(), "1234567890");
/// assert!(Phone::new("123-456-78").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongPhoneNumber` unless the value is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> BookResult<Self> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Validate phone format.
    fn validate(phone: &str) -> Result<(), ValidationError> {
        // Length in bytes equals length in chars once every char is ASCII
        if phone.len() != PHONE_LENGTH || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::WrongPhoneNumber(phone.to_string()));
        }
        Ok(())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, value: String) -> BookResult<()> {
        Self::validate(&value)?;
        self.0 = value;
        Ok(())
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
