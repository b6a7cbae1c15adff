//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, search, verse, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.search.tick();
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::FieldInput { field, text } => {
            state.search.set_field(field, text);
            UpdateResult::none()
        }
        Message::SubmitSearch => search::handle_submit(state),
        Message::QuickSearch { chapter, verse } => {
            search::handle_quick_search(state, chapter, verse)
        }
        Message::RecentNext => {
            state.search.select_next_recent();
            UpdateResult::none()
        }
        Message::RecentPrev => {
            state.search.select_previous_recent();
            UpdateResult::none()
        }
        Message::RecentActivate => search::handle_recent_activate(state),

        Message::LookupCompleted {
            request_id,
            query,
            record,
        } => search::handle_lookup_completed(state, request_id, query, *record),
        Message::LookupFailed { request_id, error } => {
            search::handle_lookup_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Verse View Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleCommentator { name } => verse::handle_toggle(state, &name),
        Message::ToggleSelectedCommentator => verse::handle_toggle_selected(state),
        Message::CommentaryUp => verse::handle_cursor_up(state),
        Message::CommentaryDown => verse::handle_cursor_down(state),
        Message::ScrollUp => verse::handle_scroll_up(state),
        Message::ScrollDown => verse::handle_scroll_down(state),
        Message::PageUp => verse::handle_page_up(state),
        Message::PageDown => verse::handle_page_down(state),
        Message::ScrollToTop => verse::handle_scroll_to_top(state),
        Message::ScrollToBottom => verse::handle_scroll_to_bottom(state),
    }
}
