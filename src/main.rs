//! Verse Explorer - look up verses and their commentaries from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::process::ExitCode;

use clap::Parser;
use verse_explorer::Args;

#[tokio::main]
async fn main() -> ExitCode {
    match verse_explorer::run(Args::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
