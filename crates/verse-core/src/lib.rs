//! # verse-core - Core Domain Types
//!
//! Foundation crate for Verse Explorer. Provides the verse data model,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`VerseRecord`] - One verse as returned by the lookup service
//! - [`Commentary`] - One commentator's translations and commentary
//! - [`VerseId`] - Opaque display-only identifier (string or number)
//! - [`Language`], [`LanguageSection`] - Per-language view of a commentary
//! - [`VerseQuery`] - A chapter/verse pair as typed by the user
//! - [`RecentSearches`] - Bounded most-recent-first list of past queries
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Startup, terminal and configuration failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use verse_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Commentary, Language, LanguageSection, RecentSearches, VerseId, VerseQuery, VerseRecord,
    MAX_RECENT_SEARCHES,
};
