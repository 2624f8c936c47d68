//! Name field.

use super::Field;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The identifying name of a contact.
///
/// A name is required for every record and cannot be empty.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("Kate").unwrap();
/// assert_eq!(name.value(), "Kate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> BookResult<()> {
        if name.is_empty() {
            return Err(BookError::InvalidArgument(
                "name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }

    fn set_value(&mut self, value: String) -> BookResult<()> {
        Self::validate(&value)?;
        self.0 = value;
        Ok(())
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
