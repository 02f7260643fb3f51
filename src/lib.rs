//! Rolodex - an interactive terminal assistant for a personal address book.
//!
//! Contacts are named records with validated ten-digit phone numbers and an
//! optional `DD.MM.YYYY` birthday, kept in insertion order and persisted
//! between sessions as a single JSON file.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phones, birthdays)
//! - **models**: the `Record` and `AddressBook` data structures
//! - **commands**: line parsing, command dispatch, error normalization
//! - **storage**: the durable store boundary and its JSON file backend
//! - **view**: the interaction channel boundary and its console backend
//! - **session**: the read loop wiring everything together
//! - **config**: environment-based configuration
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod view;

pub use commands::{execute, parse_line};
pub use config::Config;
pub use error::{CommandError, ConfigError, RecordError, StoreError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::{BookStore, JsonFileStore};
pub use view::{ConsoleView, View};
