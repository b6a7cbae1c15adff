//! Message types for the application (TEA pattern)

use verse_client::LookupError;
use verse_core::{VerseQuery, VerseRecord};

use crate::input_key::InputKey;
use crate::search::{RequestId, SearchField};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Search form
    // ─────────────────────────────────────────────────────────
    /// Replace the text of a form field
    FieldInput { field: SearchField, text: String },

    /// Submit the current form values
    SubmitSearch,

    /// Look up a pair directly, without touching the form fields
    QuickSearch { chapter: String, verse: String },

    /// Move the recent-search highlight
    RecentNext,
    RecentPrev,

    /// Quick-search the highlighted recent entry
    RecentActivate,

    // ─────────────────────────────────────────────────────────
    // Lookup completion
    // ─────────────────────────────────────────────────────────
    LookupCompleted {
        request_id: RequestId,
        query: VerseQuery,
        record: Box<VerseRecord>,
    },
    LookupFailed {
        request_id: RequestId,
        error: LookupError,
    },

    // ─────────────────────────────────────────────────────────
    // Verse view
    // ─────────────────────────────────────────────────────────
    /// Expand or collapse one commentator's panel
    ToggleCommentator { name: String },

    /// Toggle the commentator under the cursor
    ToggleSelectedCommentator,

    CommentaryUp,
    CommentaryDown,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
