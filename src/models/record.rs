//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation and serves as the record's key in the
/// address book. Phones keep insertion order and are set-like: the same
/// number cannot be stored twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, unique within the book
    pub name: ContactName,

    /// Validated phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Optional birthday; re-adding overwrites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// `RecordError::DuplicatePhone` if an equal phone is already stored,
    /// `RecordError::Validation` if the input is not a valid phone.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        if self.find_phone(phone).is_some() {
            return Err(RecordError::DuplicatePhone(phone.to_string()));
        }
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The new phone is added before the old one is removed. If removing
    /// `old` fails (it was never stored), `new` stays on the record and the
    /// removal error is returned — callers see partial success.
    ///
    /// # Errors
    ///
    /// `RecordError::DuplicatePhone` if `new` is already stored,
    /// `RecordError::Validation` if `new` is not a valid phone,
    /// `RecordError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        if self.find_phone(new).is_some() {
            return Err(RecordError::DuplicatePhone(new.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old)
    }

    /// Look up a phone by exact string match.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove a phone by exact string match.
    ///
    /// # Errors
    ///
    /// `RecordError::PhoneNotFound` if the phone is not stored.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Set the birthday, replacing any existing one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Semicolon-joined phone list, as shown by the `phone` command.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    #[test]
    fn test_add_then_find_phone() {
        let mut rec = record("alice");
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.find_phone("1234567890").unwrap().as_str(), "1234567890");
        assert!(rec.find_phone("0987654321").is_none());
    }

    #[test]
    fn test_add_duplicate_phone_fails() {
        let mut rec = record("alice");
        rec.add_phone("1234567890").unwrap();
        let err = rec.add_phone("1234567890").unwrap_err();
        assert_eq!(err, RecordError::DuplicatePhone("1234567890".to_string()));
        assert_eq!(rec.phones.len(), 1);
    }

    #[test]
    fn test_add_invalid_phone_fails() {
        let mut rec = record("alice");
        assert!(matches!(
            rec.add_phone("12345").unwrap_err(),
            RecordError::Validation(_)
        ));
        assert!(rec.phones.is_empty());
    }

    #[test]
    fn test_phones_keep_insertion_order() {
        let mut rec = record("alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("3333333333").unwrap();
        rec.add_phone("2222222222").unwrap();
        assert_eq!(rec.phones_display(), "1111111111; 3333333333; 2222222222");
    }

    #[test]
    fn test_edit_phone_replaces() {
        let mut rec = record("alice");
        rec.add_phone("1111111111").unwrap();
        rec.edit_phone("1111111111", "2222222222").unwrap();
        assert!(rec.find_phone("1111111111").is_none());
        assert_eq!(rec.find_phone("2222222222").unwrap().as_str(), "2222222222");
    }

    #[test]
    fn test_edit_phone_duplicate_new_fails() {
        let mut rec = record("alice");
        rec.add_phone("1111111111").unwrap();
        rec.add_phone("2222222222").unwrap();
        let err = rec.edit_phone("1111111111", "2222222222").unwrap_err();
        assert_eq!(err, RecordError::DuplicatePhone("2222222222".to_string()));
        assert_eq!(rec.phones.len(), 2);
    }

    #[test]
    fn test_edit_phone_missing_old_leaves_new_added() {
        // add-then-remove ordering: the failed removal must not roll back
        // the insertion of the new phone.
        let mut rec = record("alice");
        rec.add_phone("1111111111").unwrap();
        let err = rec.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("9999999999".to_string()));
        assert!(rec.find_phone("2222222222").is_some());
        assert!(rec.find_phone("1111111111").is_some());
    }

    #[test]
    fn test_remove_phone_missing_fails() {
        let mut rec = record("alice");
        let err = rec.remove_phone("1234567890").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("1234567890".to_string()));
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut rec = record("alice");
        rec.set_birthday(Birthday::parse("17.03.1990").unwrap());
        rec.set_birthday(Birthday::parse("01.01.2000").unwrap());
        assert_eq!(rec.birthday.unwrap().to_string(), "01.01.2000");
    }

    #[test]
    fn test_display_without_birthday() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        rec.set_birthday(Birthday::parse("17.03.1990").unwrap());
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 1234567890, birthday: 17.03.1990"
        );
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let mut rec = record("alice");
        rec.add_phone("1234567890").unwrap();
        rec.set_birthday(Birthday::parse("17.03.1990").unwrap());

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"alice","phones":["555-1234"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
