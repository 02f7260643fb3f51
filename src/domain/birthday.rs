//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `DD.MM.YYYY` display/storage format.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Shape gate in front of chrono: chrono's `%d`/`%m` also accept one-digit
/// components, the book format does not.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid date shape regex"));

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from `DD.MM.YYYY` input and validated at construction time, so a
/// stored birthday is always a real calendar date.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let bday = Birthday::parse("17.03.1990").unwrap();
/// assert_eq!(bday.to_string(), "17.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` input.
    ///
    /// # Validation Rules
    ///
    /// - Two-digit day, two-digit month, four-digit year, dot-separated
    /// - Must denote a real calendar date (no `31.02.2000`)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not parse.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();

        if !DATE_SHAPE.is_match(&input) {
            return Err(ValidationError::InvalidBirthday(input));
        }

        match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(input)),
        }
    }

    /// The underlying calendar date, for scheduling arithmetic.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Render a date in the book's `DD.MM.YYYY` format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
