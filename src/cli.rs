//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use verse_app::config::{self, Settings};
use verse_core::prelude::*;
use verse_core::VerseQuery;

/// Verse Explorer - look up verses and their commentaries from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "verse")]
#[command(about = "Look up scripture verses and their commentaries", long_about = None)]
pub struct Args {
    /// Verse service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Chapter to look up on start
    #[arg(long, value_name = "N", value_parser = parse_number, requires = "verse")]
    pub chapter: Option<String>,

    /// Verse to look up on start
    #[arg(long, value_name = "N", value_parser = parse_number, requires = "chapter")]
    pub verse: Option<String>,

    /// Print the verse as JSON instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Settings from the config file, with CLI overrides applied
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = config::load_settings(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            debug!(%base_url, "Base URL overridden from command line");
            settings.api.base_url = base_url.clone();
        }
        Ok(settings)
    }

    /// The `--chapter`/`--verse` pair, if both were given
    pub fn initial_query(&self) -> Option<VerseQuery> {
        match (&self.chapter, &self.verse) {
            (Some(chapter), Some(verse)) => Some(VerseQuery::new(chapter, verse)),
            _ => None,
        }
    }

    /// Target of `--init-config`
    pub fn config_path(&self) -> Result<PathBuf> {
        self.config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))
    }
}

/// Accept the same input the form fields do: one or more ASCII digits
fn parse_number(value: &str) -> std::result::Result<String, String> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("expected a number, got {:?}", value))
    }
}
