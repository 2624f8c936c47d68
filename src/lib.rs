//! Contact Book - an in-memory personal address book.
//!
//! Stores named contact records, each with phone numbers and an optional
//! birthday, validates every field on entry, and supports paginated listing
//! and days-until-birthday queries.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`) behind the `Field` trait
//! - **models**: `Record` and the `AddressBook` container
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone};
pub use error::{BookError, BookResult, ConfigError, ValidationError};
pub use models::{AddressBook, Pages, Record};
