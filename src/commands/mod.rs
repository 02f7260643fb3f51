//! Command parsing, dispatch, and error normalization.
//!
//! The dispatcher owns the only place where a `CommandError` becomes text:
//! `render_error`, a single match over error kind. Handlers never print and
//! never let a raw error reach the interaction channel.

pub mod handlers;
pub mod parser;

pub use parser::parse_line;

use crate::error::{CommandError, RecordError};
use crate::models::AddressBook;
use chrono::Local;
use tracing::debug;

/// Run one book command against the address book and return the reply text.
///
/// Unknown commands answer `Invalid command.` without touching the error
/// adapter. `window_days` feeds the `birthdays` query; its reference date is
/// today.
pub fn execute(command: &str, args: &[String], book: &mut AddressBook, window_days: i64) -> String {
    debug!(command, argc = args.len(), "dispatching");

    let result = match command {
        "add" => handlers::add_contact(args, book),
        "change" => handlers::change_contact(args, book),
        "phone" => handlers::show_phone(args, book),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => {
            handlers::upcoming_birthdays(book, window_days, Local::now().date_naive())
        }
        "remove-phone" => handlers::remove_phone(args, book),
        "delet" => handlers::delete_contact(args, book),
        _ => return "Invalid command.".to_string(),
    };

    result.unwrap_or_else(|err| render_error(&err))
}

/// Map a command failure to its fixed user-facing string.
fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::ContactNotFound(_) | CommandError::BirthdayNotFound(_) => {
            "Contact not found.".to_string()
        }
        CommandError::BadArgs | CommandError::Record(RecordError::Validation(_)) => {
            "Give me name and phone please.".to_string()
        }
        CommandError::MissingArg => {
            "Invalid input. Please provide the correct number of arguments.".to_string()
        }
        // duplicate / missing phone keep their own wording
        CommandError::Record(record_err) => record_err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn run(book: &mut AddressBook, line: &str) -> String {
        let (command, args) = parse_line(line).unwrap();
        execute(&command, &args, book, 7)
    }

    #[test]
    fn test_unknown_command() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "frobnicate"), "Invalid command.");
    }

    #[test]
    fn test_not_found_normalized() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "phone ghost"), "Contact not found.");
        assert_eq!(run(&mut book, "delet ghost"), "Contact not found.");
        assert_eq!(run(&mut book, "show-birthday ghost"), "Contact not found.");
        assert_eq!(
            run(&mut book, "change ghost 1111111111 2222222222"),
            "Contact not found."
        );
    }

    #[test]
    fn test_bad_shape_normalized() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add alice"), "Give me name and phone please.");
        assert_eq!(
            run(&mut book, "change alice 1111111111"),
            "Give me name and phone please."
        );
        assert_eq!(
            run(&mut book, "add-birthday alice"),
            "Give me name and phone please."
        );
    }

    #[test]
    fn test_missing_arg_normalized() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "phone"),
            "Invalid input. Please provide the correct number of arguments."
        );
        assert_eq!(
            run(&mut book, "delet"),
            "Invalid input. Please provide the correct number of arguments."
        );
        assert_eq!(
            run(&mut book, "show-birthday"),
            "Invalid input. Please provide the correct number of arguments."
        );
    }

    #[test]
    fn test_birthday_validation_normalized() {
        let mut book = AddressBook::new();
        run(&mut book, "add alice 1234567890");
        assert_eq!(
            run(&mut book, "add-birthday alice 17-03-1990"),
            "Give me name and phone please."
        );
    }

    #[test]
    fn test_render_error_mapping() {
        assert_eq!(
            render_error(&CommandError::ContactNotFound("x".into())),
            "Contact not found."
        );
        assert_eq!(
            render_error(&CommandError::BirthdayNotFound("x".into())),
            "Contact not found."
        );
        assert_eq!(render_error(&CommandError::BadArgs), "Give me name and phone please.");
        assert_eq!(
            render_error(&CommandError::MissingArg),
            "Invalid input. Please provide the correct number of arguments."
        );
        assert_eq!(
            render_error(&CommandError::Record(RecordError::DuplicatePhone("1234567890".into()))),
            "Phone number '1234567890' already exists."
        );
        assert_eq!(
            render_error(&CommandError::Record(RecordError::Validation(
                ValidationError::InvalidPhone("1".into())
            ))),
            "Give me name and phone please."
        );
    }
}
