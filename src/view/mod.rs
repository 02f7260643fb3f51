//! The interaction channel: how the assistant talks to its user.

pub mod console;

pub use console::ConsoleView;

use std::io;

/// Boundary for displaying output and reading one line of input.
///
/// One production implementation exists (`ConsoleView`); tests drive the
/// session with scripted fakes.
pub trait View {
    /// Show a message to the user.
    fn display(&self, message: &str);

    /// Show `message` and block for one line of input, without its line
    /// terminator. `Ok(None)` means the input stream is exhausted.
    fn prompt(&self, message: &str) -> io::Result<Option<String>>;
}
