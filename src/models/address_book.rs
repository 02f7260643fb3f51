//! AddressBook model: the owning, insertion-ordered collection of records.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the upcoming-birthday query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The day to congratulate on — the projected birthday, shifted off
    /// weekends to the following Monday
    pub congratulation: NaiveDate,
}

/// The address book: records keyed by contact name.
///
/// Iteration order is insertion order; the `all` and `birthdays` listings
/// surface it directly. Invariant: every key equals its record's name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name. An existing record under the same
    /// name is overwritten (last write wins); its slot in the iteration
    /// order is kept.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name.as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record under `name`, preserving the order of
    /// the remaining entries. `None` if there is no such record.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `window_days` of `reference`.
    ///
    /// For each record with a birthday, the birthday's month/day is
    /// projected onto the reference year (or the next year, if it has
    /// already passed). A projection landing `0..=window_days` days ahead
    /// is included; the congratulation date is moved from Saturday or
    /// Sunday to the following Monday. Results come back in book order,
    /// not date order.
    pub fn upcoming_birthdays(
        &self,
        window_days: i64,
        reference: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday else {
                continue;
            };

            let Some(mut projected) = project_onto_year(birthday.date(), reference.year()) else {
                continue;
            };
            if projected < reference {
                let Some(next) = project_onto_year(birthday.date(), reference.year() + 1) else {
                    continue;
                };
                projected = next;
            }

            let days_diff = projected.signed_duration_since(reference).num_days();
            if !(0..=window_days).contains(&days_diff) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: record.name.as_str().to_string(),
                congratulation: shift_off_weekend(projected),
            });
        }

        upcoming
    }
}

/// Project a birthday's month/day onto `year`. A Feb 29 birthday lands on
/// Mar 1 in non-leap years.
fn project_onto_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Move Saturday and Sunday dates to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday(); // Mon=0 .. Sun=6
    if weekday >= 5 {
        date.checked_add_days(Days::new(u64::from(7 - weekday)))
            .unwrap_or(date)
    } else {
        date
    }
}
