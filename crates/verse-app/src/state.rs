//! Application state (Model in TEA pattern)

use verse_core::VerseRecord;

use crate::config::Settings;
use crate::search::{SearchField, SearchState};
use crate::viewer::VerseViewState;

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Chapter,
    Verse,
    Recent,
    Commentaries,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Chapter,
        Focus::Verse,
        Focus::Recent,
        Focus::Commentaries,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The form field this focus edits, if any
    pub fn field(self) -> Option<SearchField> {
        match self {
            Focus::Chapter => Some(SearchField::Chapter),
            Focus::Verse => Some(SearchField::Verse),
            Focus::Recent | Focus::Commentaries => None,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    pub focus: Focus,

    /// Search form, loading flag, error and history
    pub search: SearchState,

    /// Record currently on screen. Replaced only by a successful lookup.
    pub verse: Option<VerseRecord>,

    /// Expansion, cursor and scroll of the verse view
    pub viewer: VerseViewState,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Show a new record. The view starts with every commentary collapsed.
    pub fn show_verse(&mut self, record: VerseRecord) {
        self.verse = Some(record);
        self.viewer.reset();
        if self.focus == Focus::Commentaries && self.commentary_count() == 0 {
            self.focus = Focus::Chapter;
        }
    }

    pub fn commentary_count(&self) -> usize {
        self.verse.as_ref().map_or(0, |v| v.commentaries.len())
    }

    /// Commentator name under the cursor
    pub fn selected_commentator(&self) -> Option<&str> {
        self.verse
            .as_ref()
            .and_then(|v| v.commentaries.get(self.viewer.cursor))
            .map(|c| c.commentator.as_str())
    }

    /// Whether `focus` can currently take input
    fn is_focusable(&self, focus: Focus) -> bool {
        match focus {
            Focus::Chapter | Focus::Verse => true,
            Focus::Recent => !self.search.recent.is_empty(),
            Focus::Commentaries => self.commentary_count() > 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(Focus::ORDER.len() - 1);
    }

    fn cycle_focus(&mut self, step: usize) {
        let len = Focus::ORDER.len();
        let mut index = self.focus.index();
        for _ in 0..len {
            index = (index + step) % len;
            let candidate = Focus::ORDER[index];
            if self.is_focusable(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }
}
