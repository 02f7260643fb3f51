//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// A name is the record's key in the address book, so it cannot be empty.
/// Beyond that, any string goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert!(ContactName::new("").is_err());
        assert!(ContactName::new("   ").is_err());
    }

    #[test]
    fn test_name_serialization() {
        let name = ContactName::new("alice").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"alice\"");

        let back: ContactName = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(back, name);
    }
}
