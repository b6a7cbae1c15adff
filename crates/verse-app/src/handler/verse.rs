//! Verse view handlers: commentary expansion, cursor and scrolling

use crate::message::Message;
use crate::state::AppState;
use crate::viewer::PAGE_SCROLL_LINES;

use super::UpdateResult;

/// Toggle a commentator by name. Unknown names are ignored.
pub fn handle_toggle(state: &mut AppState, name: &str) -> UpdateResult {
    let known = state
        .verse
        .as_ref()
        .is_some_and(|v| v.has_commentator(name));
    if known {
        state.viewer.toggle(name);
    }
    UpdateResult::none()
}

pub fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_commentator() {
        Some(name) => UpdateResult::message(Message::ToggleCommentator {
            name: name.to_string(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.viewer.cursor_up();
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let count = state.commentary_count();
    state.viewer.cursor_down(count);
    UpdateResult::none()
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_up(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_down(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.viewer.scroll_to_bottom();
    UpdateResult::none()
}
