//! Full-screen rendering tests for `view`

use super::*;
use crate::test_utils::TestTerminal;
use verse_app::config::Settings;
use verse_app::SearchField;
use verse_client::test_utils::sample_record;
use verse_core::{Commentary, VerseQuery};

fn draw(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen() {
    let mut state = AppState::new();
    let term = draw(&mut state);

    assert!(term.buffer_contains("Verse Explorer"));
    assert!(term.buffer_contains("Search Verse"));
    assert!(term.buffer_contains("Enter a chapter and verse"));
    assert!(!term.buffer_contains("Recent Searches"));
}

#[test]
fn test_recent_panel_appears_with_history() {
    let mut state = AppState::new();
    state.search.recent.record(VerseQuery::new("2", "47"));

    let term = draw(&mut state);

    assert!(term.buffer_contains("Recent Searches"));
    assert!(term.buffer_contains("Chapter 2, Verse 47"));
}

#[test]
fn test_verse_and_error_shown_together() {
    let mut state = AppState::new();
    state.show_verse(sample_record(2, 47, vec![Commentary::new("Shankara")]));
    state.search.set_field(SearchField::Chapter, "99".into());
    state.search.set_field(SearchField::Verse, "1".into());
    state.search.begin();
    state.search.fail("Verse not found".into());

    let term = draw(&mut state);

    assert!(term.buffer_contains("Verse not found"));
    assert!(term.buffer_contains("Chapter 2, Verse 47"));
    assert!(term.buffer_contains("Shankara"));
}

#[test]
fn test_key_hints_can_be_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_key_hints = false;
    let mut state = AppState::with_settings(settings);

    let term = draw(&mut state);

    assert!(!term.buffer_contains("Tab next"));
}

#[test]
fn test_configured_base_url_in_header() {
    let mut settings = Settings::default();
    settings.api.base_url = "http://verses.local/api".into();
    let mut state = AppState::with_settings(settings);

    let term = draw(&mut state);

    assert!(term.line_contains(1, "http://verses.local/api"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = AppState::new();
    state.show_verse(sample_record(2, 47, vec![Commentary::new("Shankara")]));
    state.viewer.toggle("Shankara");

    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &mut state));
}
