//! File logging for the whole workspace
//!
//! The TUI draws on stdout, so every crate logs through `tracing` into a
//! daily rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "VERSE_LOG";

const LOG_FILE_NAME: &str = "verse.log";

/// Used when `VERSE_LOG` is unset or unparsable
const DEFAULT_FILTER: &str =
    "verse_explorer=info,verse_core=info,verse_client=info,verse_app=info,verse_tui=info,warn";

/// Install the global subscriber writing to `verse.log`.
///
/// `VERSE_LOG=verse_client=trace verse --chapter 2 --verse 47` traces the
/// HTTP side of a single lookup.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::debug!(dir = %log_dir.display(), "File logging ready");

    Ok(())
}

/// `{data_local_dir}/verse-explorer/logs`, or `./verse-explorer/logs` when
/// the platform has no data directory
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verse-explorer")
        .join("logs")
}
