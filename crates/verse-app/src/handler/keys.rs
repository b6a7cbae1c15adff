//! Key event handlers for each focus target

use crate::input_key::InputKey;
use crate::message::Message;
use crate::search::SearchField;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys first
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::Chapter => handle_key_field(state, SearchField::Chapter, key),
        Focus::Verse => handle_key_field(state, SearchField::Verse, key),
        Focus::Recent => handle_key_recent(key),
        Focus::Commentaries => handle_key_commentaries(key),
    }
}

/// Handle key events while a form field has focus
fn handle_key_field(state: &AppState, field: SearchField, key: InputKey) -> Option<Message> {
    let current = state.search.field(field);
    match key {
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(Message::FieldInput { field, text })
        }
        InputKey::CharCtrl('u') => {
            if current.is_empty() {
                None
            } else {
                Some(Message::FieldInput {
                    field,
                    text: String::new(),
                })
            }
        }
        other => {
            let digit = other.digit()?;
            let mut text = current.to_string();
            text.push(digit);
            Some(Message::FieldInput { field, text })
        }
    }
}

/// Handle key events in the recent searches list
fn handle_key_recent(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j') => Some(Message::RecentNext),
        InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k') => Some(Message::RecentPrev),
        InputKey::Enter => Some(Message::RecentActivate),
        _ => None,
    }
}

/// Handle key events in the commentary list
fn handle_key_commentaries(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => Some(Message::CommentaryUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CommentaryDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelectedCommentator),
        InputKey::Char('K') => Some(Message::ScrollUp),
        InputKey::Char('J') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}
