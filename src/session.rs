//! The interactive session: read loop, glue between view, store, and
//! command dispatch.

use crate::commands::{self, parse_line};
use crate::config::Config;
use crate::storage::BookStore;
use crate::view::View;
use tracing::{info, warn};

/// The `help` reply: one line per supported command.
pub fn help_text() -> String {
    [
        "Supported commands:",
        "hello - Greet the bot",
        "add <name> <phone> - Add a new contact",
        "change <name> <old_phone> <new_phone> - Change a contact's phone",
        "phone <name> - Show phone numbers for a contact",
        "all - Show all contacts",
        "add-birthday <name> <date> - Add birthday",
        "show-birthday <name> - Show birthday",
        "birthdays - Show upcoming birthdays",
        "remove-phone <name> <phone> - Remove a phone number from a contact",
        "delet <name> - Delete a contact",
        "help - Show this help message",
        "exit - Exit the bot",
    ]
    .join("\n")
}

/// Run the assistant until `exit` (or end of input, which behaves the same).
///
/// The book is hydrated from the store once at startup — unreadable data
/// degrades to an empty book — and persisted once on the way out.
pub fn run(view: &dyn View, store: &dyn BookStore, config: &Config) {
    let mut book = store.load().unwrap_or_else(|err| {
        warn!(error = %err, "could not load the address book, starting empty");
        Default::default()
    });
    info!(records = book.len(), "session started");

    view.display("Welcome to the assistant bot!");

    loop {
        let line = match view.prompt("Enter a command: ") {
            Ok(Some(line)) => line,
            // end of input: leave as if the user typed `exit`
            Ok(None) => break,
            Err(err) => {
                warn!(error = %err, "could not read input, shutting down");
                break;
            }
        };

        let Some((command, args)) = parse_line(&line) else {
            view.display("Please enter a valid command. Write <help> to see all commands.");
            continue;
        };

        match command.as_str() {
            "exit" => break,
            "hello" => view.display("How can I help you?"),
            "help" => view.display(&help_text()),
            _ => {
                let reply =
                    commands::execute(&command, &args, &mut book, config.birthday_window_days);
                view.display(&reply);
            }
        }
    }

    if let Err(err) = store.save(&book) {
        warn!(error = %err, "could not save the address book");
        view.display("Warning: the address book could not be saved.");
    }
    view.display("Good bye!");
    info!("session finished");
}
