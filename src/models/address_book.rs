//! The address book: records keyed by contact name.

use super::record::Record;
use crate::domain::Field;
use crate::error::{BookError, BookResult};
use indexmap::IndexMap;

/// A collection of records keyed by name, enumerated in insertion order.
///
/// Adding a record under a name that already exists replaces the stored
/// record but keeps its position in the enumeration order.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut kate = Record::new("Kate", "13.01.1988").unwrap();
/// kate.add_phone("1234567890").unwrap();
/// book.add_record(kate);
///
/// assert!(book.find("Kate").is_some());
/// book.delete("Kate");
/// assert!(book.find("Kate").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().value().to_string();
        tracing::debug!(name = %key, "Adding record");
        // An existing key keeps its position
        if self.records.insert(key, record).is_some() {
            tracing::debug!("Replaced existing record");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record named `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name, "Deleted record");
        } else {
            tracing::trace!(name, "Delete ignored, no such record");
        }
        removed
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Render the book in pages of up to `page_size` records.
    ///
    /// Each page is the records' display strings joined by `\n`. The
    /// iterator yields `ceil(len / page_size)` pages and borrows the book,
    /// so every call starts a fresh traversal of the current state.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `page_size` is zero.
    pub fn iter_pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Pages {
            records: self.records.values(),
            page_size,
        })
    }
}

/// Iterator over rendered pages of an [`AddressBook`].
///
/// Created by [`AddressBook::iter_pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: indexmap::map::Values<'a, String, Record>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let lines: Vec<String> = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(Record::to_string)
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}
