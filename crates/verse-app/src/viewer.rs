//! Verse view state: which commentator is expanded, cursor and scroll

/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Local state of the verse view.
///
/// `expanded` is a single key, so at most one commentary is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseViewState {
    /// Commentator whose panel is open
    pub expanded: Option<String>,
    /// Index of the commentary row under the cursor
    pub cursor: usize,
    /// First visible line of the verse view
    pub scroll: u16,
    /// Ask the renderer to bring the cursor row into view
    pub follow_cursor: bool,
}

impl VerseViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse when `name` is open, otherwise open `name` (closing any other)
    pub fn toggle(&mut self, name: &str) {
        if self.is_expanded(name) {
            self.expanded = None;
        } else {
            self.expanded = Some(name.to_string());
        }
        self.follow_cursor = true;
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    /// Back to the initial state, used whenever a new record is shown
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor = true;
    }

    pub fn cursor_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
        self.follow_cursor = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Clamped to the real content height by the renderer
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
    }

    /// Keep `scroll` inside `0..=max_scroll`
    pub fn clamp_scroll(&mut self, max_scroll: u16) {
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Adjust `scroll` so rows `top..bottom` fit in a viewport of `height`
    pub fn reveal(&mut self, top: u16, bottom: u16, height: u16) {
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll.saturating_add(height) {
            self.scroll = bottom.saturating_sub(height).min(top);
        }
    }
}
