//! Lookup failures

use thiserror::Error;

/// Why a lookup did not produce a verse.
///
/// The `Display` output is what the search form shows inline, so a
/// non-success status reads exactly "Verse not found" and every other
/// failure shows the underlying message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Non-success HTTP status, or a `null` body
    #[error("Verse not found")]
    NotFound,

    /// Connection refused, DNS failure, timeout, truncated body...
    #[error("{0}")]
    Transport(String),

    /// Body was not a verse record
    #[error("{0}")]
    Decode(String),

    /// The request URL could not be built from the base URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}
