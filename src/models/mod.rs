//! Contact book data models.
//!
//! This module contains the contact record and the address book that keys
//! records by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages};
pub use record::Record;
