//! Search submission and lookup completion handlers

use tracing::{debug, info, warn};
use verse_client::LookupError;
use verse_core::{VerseQuery, VerseRecord};

use crate::message::Message;
use crate::search::RequestId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Submit the form values. Ignored while the submit control is disabled.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.search.can_submit() {
        debug!(
            loading = state.search.loading,
            "Submit ignored: control disabled"
        );
        return UpdateResult::none();
    }
    let query = state.search.form.clone();
    begin_lookup(state, query)
}

/// Copy the pair into the form fields and look it up straight away
pub fn handle_quick_search(state: &mut AppState, chapter: String, verse: String) -> UpdateResult {
    let query = VerseQuery::new(chapter, verse);
    state.search.form = query.clone();
    begin_lookup(state, query)
}

/// Quick-search the selected recent entry
pub fn handle_recent_activate(state: &mut AppState) -> UpdateResult {
    match state.search.selected_recent().cloned() {
        Some(VerseQuery { chapter, verse }) => {
            UpdateResult::message(Message::QuickSearch { chapter, verse })
        }
        None => UpdateResult::none(),
    }
}

/// Shared path for submit and quick-search: loading on, error cleared,
/// one background fetch requested.
fn begin_lookup(state: &mut AppState, query: VerseQuery) -> UpdateResult {
    let request_id = state.search.begin();
    info!(request_id, query = %query.label(), "Looking up verse");
    UpdateResult::action(UpdateAction::LookupVerse { request_id, query })
}

pub fn handle_lookup_completed(
    state: &mut AppState,
    request_id: RequestId,
    query: VerseQuery,
    record: VerseRecord,
) -> UpdateResult {
    if !state.search.is_current(request_id) {
        debug!(request_id, "Dropping stale lookup result");
        return UpdateResult::none();
    }

    info!(request_id, heading = %record.heading(), "Verse loaded");
    state.search.succeed(query);
    state.show_verse(record);
    UpdateResult::none()
}

pub fn handle_lookup_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: LookupError,
) -> UpdateResult {
    if !state.search.is_current(request_id) {
        debug!(request_id, "Dropping stale lookup failure");
        return UpdateResult::none();
    }

    warn!(request_id, %error, "Lookup failed");
    state.search.fail(error.to_string());
    UpdateResult::none()
}
