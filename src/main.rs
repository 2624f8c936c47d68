//! Contact Book - demonstration driver
//!
//! Builds a small address book, prints the days until one contact's birthday
//! and then prints the whole book page by page.

use anyhow::Result;
use contact_book::{AddressBook, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr, pages to stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new();

    let mut kate = Record::new("Kate", "13.01.1988")?;
    kate.add_phone("1234567890")?;
    book.add_record(kate);

    if let Some(kate) = book.find("Kate") {
        match kate.days_to_birthday() {
            Ok(Some(days)) => println!("{}", days),
            Ok(None) => println!("No birthday recorded"),
            Err(e) => error!("Failed to compute days to birthday: {}", e),
        }
    }

    for i in 1..=6 {
        let mut record = Record::with_name(format!("Kate{}", i))?;
        record.add_phone("1234567890")?;
        book.add_record(record);
    }

    info!(
        "Printing {} records in pages of {}",
        book.len(),
        config.page_size
    );

    for page in book.iter_pages(config.page_size)? {
        println!("{}", page);
    }

    Ok(())
}
