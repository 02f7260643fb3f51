//! Configuration management for the rolodex assistant.
//!
//! Configuration comes from environment variables, with a `.env` file
//! honored when present. Every variable has a default, so a bare
//! `rolodex` invocation works out of the box.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default location of the persisted book, relative to the working directory.
const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Default width of the upcoming-birthday window, in days.
const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Runtime configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted
    pub book_path: String,

    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_BOOK_PATH`: path of the persisted book (default: `addressbook.json`)
    /// - `ROLODEX_BIRTHDAY_WINDOW_DAYS`: birthday look-ahead in days, 1..=365 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; missing is fine
        let _ = dotenvy::dotenv();

        let book_path =
            env::var("ROLODEX_BOOK_PATH").unwrap_or_else(|_| DEFAULT_BOOK_PATH.to_string());

        let birthday_window_days =
            Self::parse_env_i64("ROLODEX_BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if !(1..=365).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 365".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: DEFAULT_BOOK_PATH.to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
