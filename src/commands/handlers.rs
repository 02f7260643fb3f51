//! Handlers for the book commands.
//!
//! Each handler takes the positional arguments and the address book and
//! returns `Result<String, CommandError>`. Failures are rendered to fixed
//! user strings by the dispatcher; `add`, `change` and `remove-phone`
//! convert record-level failures to their own message locally so feedback
//! like "already exists" survives normalization.

use crate::domain::{format_date, Birthday, ContactName};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// `add <name> <phone>` — create the contact if needed, then add the phone.
///
/// The record is created before phone validation runs, matching the book's
/// historical behavior: `add alice nonsense` leaves an empty `alice` behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::BadArgs);
    };

    if book.find(name).is_none() {
        book.add_record(Record::new(ContactName::new(name.clone())?));
    }
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    match record.add_phone(phone) {
        Ok(()) => Ok("Contact added.".to_string()),
        Err(err) => Ok(err.to_string()),
    }
}

/// `change <name> <old> <new>` — replace a phone on an existing contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::BadArgs);
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    match record.edit_phone(old_phone, new_phone) {
        Ok(()) => Ok("Phone updated.".to_string()),
        Err(err) => Ok(err.to_string()),
    }
}

/// `phone <name>` — semicolon-joined phone list.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArg)?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    Ok(record.phones_display())
}

/// `all` — one display line per record, in book order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(book
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `remove-phone <name> <phone>` — remove a phone; a contact left with no
/// phones is deleted from the book and the reply says so.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::BadArgs);
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    match record.remove_phone(phone) {
        Ok(()) => {
            let now_empty = record.phones.is_empty();
            if now_empty {
                book.delete(name);
                Ok(format!(
                    "Phone removed. Contact '{name}' deleted because no phones left."
                ))
            } else {
                Ok(format!("Phone '{phone}' removed from contact '{name}'."))
            }
        }
        Err(err) => Ok(err.to_string()),
    }
}

/// `delet <name>` — unconditional contact deletion.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArg)?;
    book.delete(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    Ok(format!("Contact <{name}> deleted."))
}

/// `add-birthday <name> <DD.MM.YYYY>` — set (or replace) a birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(CommandError::BadArgs);
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    record.set_birthday(Birthday::parse(date.clone())?);
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>` — the stored birthday as `DD.MM.YYYY`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArg)?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    let birthday = record
        .birthday
        .ok_or_else(|| CommandError::BirthdayNotFound(name.clone()))?;
    Ok(birthday.to_string())
}

/// `birthdays` — `name - DD.MM.YYYY` congratulation lines for the window
/// starting at `reference`.
pub fn upcoming_birthdays(
    book: &AddressBook,
    window_days: i64,
    reference: NaiveDate,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(window_days, reference);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays this week.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|u| format!("{} - {}", u.name, format_date(u.congratulation)))
        .collect::<Vec<_>>()
        .join("\n"))
}
