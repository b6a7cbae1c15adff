//! Headless mode - single lookup printed as JSON, no TUI
//!
//! The record goes to stdout as pretty-printed JSON. On failure the
//! user-facing message goes to stderr and the process exits non-zero.

use std::io::{self, Write};
use std::process::ExitCode;

use verse_client::{LookupError, VerseLookup};
use verse_core::prelude::*;
use verse_core::VerseQuery;

/// Look up `query` and serialize the record
pub async fn lookup_json<L>(
    lookup: &L,
    query: &VerseQuery,
) -> std::result::Result<String, LookupError>
where
    L: VerseLookup + Sync,
{
    let record = lookup.fetch_verse(query).await?;
    serde_json::to_string_pretty(&record).map_err(|e| LookupError::Decode(e.to_string()))
}

/// Run one lookup and report it on stdout/stderr
pub async fn run_headless<L>(lookup: &L, query: &VerseQuery) -> ExitCode
where
    L: VerseLookup + Sync,
{
    info!(query = %query.label(), "Headless lookup");

    match lookup_json(lookup, query).await {
        Ok(json) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
                error!("Failed to write headless output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "Headless lookup failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
