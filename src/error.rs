//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised when a field value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number is not exactly ten ASCII digits
    #[error("wrong phone number: {0}")]
    WrongPhoneNumber(String),

    /// Birthday is not a real `DD.MM.YYYY` date
    #[error("wrong date format: {0}")]
    WrongDateFormat(String),

    /// Birthday month/day does not exist in the year it was anchored to
    #[error("birthday {birthday} does not occur in {year}")]
    BirthdayNotInYear { birthday: String, year: i32 },
}

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced phone number is not on the record
    #[error("Phone not found: {0}")]
    NotFound(String),

    /// Argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
