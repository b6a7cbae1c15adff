//! Search form state: field values, loading/error, recent searches

use verse_core::{RecentSearches, VerseQuery};

/// Identifies one lookup attempt. Only the newest attempt may update the UI.
pub type RequestId = u64;

/// Which form field a text edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Chapter,
    Verse,
}

/// State owned by the search form
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current field values, sent verbatim on submit
    pub form: VerseQuery,
    /// A lookup is in flight
    pub loading: bool,
    /// Message from the last failed lookup
    pub error: Option<String>,
    /// Past successful queries, most recent first
    pub recent: RecentSearches,
    /// Highlighted entry in the recent list
    pub recent_selected: usize,
    /// Spinner frame while loading
    pub animation_frame: u64,
    last_request_id: RequestId,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Chapter => &self.form.chapter,
            SearchField::Verse => &self.form.verse,
        }
    }

    pub fn set_field(&mut self, field: SearchField, text: String) {
        match field {
            SearchField::Chapter => self.form.chapter = text,
            SearchField::Verse => self.form.verse = text,
        }
    }

    /// The submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && self.form.is_complete()
    }

    /// Start a new attempt: loading on, error cleared. Any attempt still in
    /// flight becomes stale.
    pub fn begin(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.loading = true;
        self.error = None;
        self.animation_frame = 0;
        self.last_request_id
    }

    /// `id` belongs to the most recently started attempt
    pub fn is_current(&self, id: RequestId) -> bool {
        self.loading && id == self.last_request_id
    }

    /// Attempt succeeded: record the submitted pair
    pub fn succeed(&mut self, query: VerseQuery) {
        self.loading = false;
        self.recent.record(query);
        self.recent_selected = 0;
    }

    /// Attempt failed: show the message inline
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select_next_recent(&mut self) {
        if !self.recent.is_empty() {
            self.recent_selected = (self.recent_selected + 1) % self.recent.len();
        }
    }

    pub fn select_previous_recent(&mut self) {
        if !self.recent.is_empty() {
            self.recent_selected = self
                .recent_selected
                .checked_sub(1)
                .unwrap_or(self.recent.len() - 1);
        }
    }

    pub fn selected_recent(&self) -> Option<&VerseQuery> {
        self.recent.get(self.recent_selected)
    }

    pub fn tick(&mut self) {
        if self.loading {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}
