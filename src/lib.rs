//! Verse Explorer
//!
//! Terminal client for a verse lookup service. The binary wires the CLI,
//! settings and logging to either the TUI (`verse-tui`) or headless mode.

pub mod cli;
pub mod headless;

use std::process::ExitCode;

use verse_client::VerseClient;
use verse_core::prelude::*;

pub use cli::Args;

/// Application entry point after argument parsing
pub async fn run(args: Args) -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    verse_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Verse Explorer starting");
    info!("═══════════════════════════════════════════════════════");

    if args.init_config {
        let path = args.config_path()?;
        if verse_app::config::init_config_file(&path)? {
            println!("Created config at {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let settings = args.resolve_settings()?;
    info!(base_url = %settings.api.base_url, "Using verse service");
    let client = VerseClient::with_timeout(&settings.api.base_url, settings.api.timeout())?;

    let result = if args.headless {
        let query = args
            .initial_query()
            .ok_or_else(|| Error::missing_argument("--chapter/--verse"))?;
        Ok(headless::run_headless(&client, &query).await)
    } else {
        verse_tui::run(settings, client, args.initial_query())
            .await
            .map(|()| ExitCode::SUCCESS)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Verse Explorer exiting");
    result
}
