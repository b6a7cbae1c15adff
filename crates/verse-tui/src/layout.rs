//! Screen layout definitions for the TUI
//!
//! Header on top, then a band holding the search form (and the recent
//! searches panel when there is history), then the verse view taking the
//! rest, with an optional key hint line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + border
pub const HEADER_HEIGHT: u16 = 3;

/// Search band: border + fields + gap + submit + error title + two message
/// rows + border
pub const SEARCH_HEIGHT: u16 = 8;

/// Width of the recent searches panel when shown
pub const RECENT_WIDTH: u16 = 28;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    /// Present only when there is search history
    pub recent: Option<Rect>,
    pub verse: Rect,
    /// Present only when key hints are enabled
    pub hints: Option<Rect>,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_recent` - Reserve a panel for recent searches
/// * `show_hints` - Reserve a bottom line for key hints
pub fn create(area: Rect, show_recent: bool, show_hints: bool) -> ScreenAreas {
    let hints_height = if show_hints { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(hints_height),
    ])
    .split(area);

    let (search, recent) = if show_recent {
        let band = Layout::horizontal([Constraint::Min(30), Constraint::Length(RECENT_WIDTH)])
            .split(chunks[1]);
        (band[0], Some(band[1]))
    } else {
        (chunks[1], None)
    };

    ScreenAreas {
        header: chunks[0],
        search,
        recent,
        verse: chunks[2],
        hints: show_hints.then_some(chunks[3]),
    }
}
