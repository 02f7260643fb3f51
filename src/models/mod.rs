//! Data models for the address book.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
