//! Configuration file parsing for Verse Explorer
//!
//! Supports `{config_dir}/verse-explorer/config.toml` or an explicit path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
