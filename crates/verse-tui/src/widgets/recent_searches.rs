//! Recent searches panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use verse_app::SearchState;

use crate::theme::styles;

/// Most-recent-first list of past queries; the highlighted entry is
/// quick-searched with Enter
pub struct RecentSearchesPanel<'a> {
    search: &'a SearchState,
    focused: bool,
}

impl<'a> RecentSearchesPanel<'a> {
    pub fn new(search: &'a SearchState, focused: bool) -> Self {
        Self { search, focused }
    }
}

impl Widget for RecentSearchesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Recent Searches ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .search
            .recent
            .iter()
            .enumerate()
            .map(|(index, query)| {
                let style = match (index == self.search.recent_selected, self.focused) {
                    (true, true) => styles::focused_selected(),
                    (true, false) => styles::unfocused_selected(),
                    (false, _) => styles::text_primary(),
                };
                Line::from(Span::styled(query.label(), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
