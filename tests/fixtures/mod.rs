//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and books.

use contact_book::{AddressBook, Record};

/// Create a record with one phone and no birthday.
pub fn sample_record(name: &str, phone: &str) -> Record {
    let mut record = Record::with_name(name).expect("valid name");
    record.add_phone(phone).expect("valid phone");
    record
}

/// Create a book holding `count` records named `Kate0`, `Kate1`, ...
#[allow(dead_code)]
pub fn sample_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(sample_record(&format!("Kate{}", i), "1234567890"));
    }
    book
}
