//! JSON file implementation of the book store.

use super::BookStore;
use crate::error::StoreResult;
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists the address book as pretty-printed JSON at a fixed path.
///
/// The file format is an implementation detail of serde and not meant to be
/// hand-edited; records with invalid phones or birthdays fail
/// deserialization outright.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no prior book, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let book: AddressBook = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), records = book.len(), "book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), records = book.len(), "book saved");
        Ok(())
    }
}
