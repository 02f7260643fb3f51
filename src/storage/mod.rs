//! Durable storage for the address book.
//!
//! The store is touched exactly twice per session: once to hydrate the book
//! at startup and once to persist it at a clean exit. The whole book is one
//! blob; there are no incremental writes.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::error::StoreResult;
use crate::models::AddressBook;

/// Abstraction over address book persistence.
///
/// Enables different implementations (file-backed, in-memory for tests).
pub trait BookStore {
    /// Load the persisted book. A store with no prior data returns an
    /// empty book, not an error.
    fn load(&self) -> StoreResult<AddressBook>;

    /// Persist the entire book as one blob.
    fn save(&self, book: &AddressBook) -> StoreResult<()>;
}
