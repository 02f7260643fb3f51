//! Error types for the rolodex assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single record's phone list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone is already present on the record
    #[error("Phone number '{0}' already exists.")]
    DuplicatePhone(String),

    /// The phone is not present on the record
    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can reach the command-dispatch boundary.
///
/// Every variant is recoverable: the dispatcher renders it as a fixed
/// user-facing string and the session keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No contact under the given name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// The contact exists but has no birthday set
    #[error("Birthday for '{0}' not found.")]
    BirthdayNotFound(String),

    /// A record-level failure propagated out of a handler
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The arguments did not match the command's fixed shape
    #[error("Give me name and phone please.")]
    BadArgs,

    /// A required positional argument is missing
    #[error("Invalid input. Please provide the correct number of arguments.")]
    MissingArg,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Record(RecordError::Validation(err))
    }
}

/// Errors that can occur while loading or persisting the address book.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
