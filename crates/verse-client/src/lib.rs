//! # verse-client - Verse Lookup Service Client
//!
//! Talks to the external verse service over HTTP. Depends only on
//! `verse-core`.
//!
//! ## Public API
//!
//! - [`VerseLookup`] - Async lookup trait (`Send` futures), implemented by
//!   [`VerseClient`] and, with the `test-helpers` feature, by `FakeLookup`
//! - [`VerseClient`] - reqwest-backed implementation
//! - [`LookupError`] - Lookup failure, whose `Display` is the message shown
//!   to the user
//! - [`parse_verse_body`] - Decode a response body into a [`VerseRecord`]

pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{parse_verse_body, VerseClient, DEFAULT_BASE_URL};
pub use error::LookupError;

use verse_core::{VerseQuery, VerseRecord};

/// Look up a single verse by chapter and verse number.
///
/// `VerseLookup` is the `Send` variant generated by `trait_variant`; use it
/// as the bound when the future is spawned onto the tokio runtime.
#[trait_variant::make(VerseLookup: Send)]
pub trait LocalVerseLookup {
    /// Fetch the record for `query`, sending its values verbatim
    async fn fetch_verse(&self, query: &VerseQuery) -> Result<VerseRecord, LookupError>;
}
