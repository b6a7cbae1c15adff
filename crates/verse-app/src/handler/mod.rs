//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus
//! - `search`: Submission, quick-search and lookup completion
//! - `verse`: Commentary expansion and verse view scrolling

pub(crate) mod keys;
pub(crate) mod search;
pub(crate) mod update;
pub(crate) mod verse;


use verse_core::VerseQuery;

use crate::message::Message;
use crate::search::RequestId;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch one verse in the background and report back with
    /// `LookupCompleted` or `LookupFailed` carrying `request_id`
    LookupVerse {
        request_id: RequestId,
        query: VerseQuery,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
