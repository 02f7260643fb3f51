//! Rolodex - Main entry point
//!
//! Wires the console view and the JSON file store around the interactive
//! session.

use anyhow::Result;
use rolodex::view::ConsoleView;
use rolodex::{session, Config, JsonFileStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Subscriber is not up yet; report by hand
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, so the prompt on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(book_path = %config.book_path, "starting rolodex");

    let store = JsonFileStore::new(&config.book_path);
    let view = ConsoleView::new();

    session::run(&view, &store, &config);

    info!("rolodex shutdown complete");
    Ok(())
}
