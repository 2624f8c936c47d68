//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a required name, any number of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. Operations that look a phone
/// up by number act on the first match only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    /// Create a record. Pass `""` as `birthday` when none is known.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidArgument` if `name` is empty
    /// - `ValidationError::WrongDateFormat` if `birthday` is malformed
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::new(birthday)?,
        })
    }

    /// Create a record without a birthday.
    pub fn with_name(name: impl Into<String>) -> BookResult<Self> {
        Self::new(name, "")
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Replace the birthday. `""` clears it.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> BookResult<()> {
        self.birthday.set_value(birthday.into())
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.value() == number)
    }

    /// Validate `number` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, number: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(number)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is appended and then the first `old` is removed, so the new
    /// number ends up last. An invalid `new` leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no phone equals `old`
    /// - `ValidationError::WrongPhoneNumber` if `new` is malformed
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::NotFound(old.to_string()));
        }
        let new = new.into();
        tracing::debug!(name = %self.name, old, new = %new, "Editing phone");
        self.add_phone(new)?;
        self.remove_phone(old)
    }

    /// Remove the first phone equal to `number`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no phone equals `number`.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.value() == number)
            .ok_or_else(|| BookError::NotFound(number.to_string()))?;
        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone = number, "Removed phone");
        Ok(())
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// See [`Record::days_to_birthday_from`].
    pub fn days_to_birthday(&self) -> BookResult<Option<i64>> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `Ok(None)` when no birthday is recorded, `Ok(Some(0))` when the
    /// birthday is `today`. The result is never above 366.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BirthdayNotInYear` when a 29 February
    /// birthday would have to be placed in a non-leap year.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> BookResult<Option<i64>> {
        let Some(this_year) = self.birthday.in_year(today.year())? else {
            return Ok(None);
        };
        let next = if this_year >= today {
            this_year
        } else {
            self.birthday.in_year(today.year() + 1)?.unwrap_or(this_year)
        };
        Ok(Some(next.signed_duration_since(today).num_days()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|phone| phone.value()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
