//! Validated contact fields.
//!
//! Each field owns a single value and validates it both at construction and
//! on every later assignment, so a field can never hold a value that failed
//! validation.

pub mod birthday;
pub mod name;
pub mod phone;

pub use crate::error::ValidationError;
pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;

use crate::error::BookResult;
use std::fmt;

/// Capability set shared by every contact field.
///
/// `Display` renders the stored value verbatim.
pub trait Field: fmt::Display {
    /// The currently stored value.
    fn value(&self) -> &str;

    /// Validate `value` and store it.
    ///
    /// # Errors
    ///
    /// Returns the field's validation error; the previous value is kept.
    fn set_value(&mut self, value: String) -> BookResult<()>;
}
