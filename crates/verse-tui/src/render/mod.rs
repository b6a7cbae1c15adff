//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use verse_app::state::{AppState, Focus};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure except for verse view bookkeeping (scroll clamping and cursor
/// follow), which needs the laid-out content height.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(
        area,
        !state.search.recent.is_empty(),
        state.settings.ui.show_key_hints,
    );

    frame.render_widget(
        widgets::MainHeader::new(&state.settings.api.base_url),
        areas.header,
    );

    frame.render_widget(
        widgets::SearchForm::new(&state.search, state.focus),
        areas.search,
    );

    if let Some(recent_area) = areas.recent {
        frame.render_widget(
            widgets::RecentSearchesPanel::new(&state.search, state.focus == Focus::Recent),
            recent_area,
        );
    }

    match &state.verse {
        Some(record) => {
            let verse_view =
                widgets::VerseView::new(record).focused(state.focus == Focus::Commentaries);
            frame.render_stateful_widget(verse_view, areas.verse, &mut state.viewer);
        }
        None => frame.render_widget(widgets::EmptyVerseView, areas.verse),
    }

    if let Some(hints_area) = areas.hints {
        frame.render_widget(widgets::KeyHints::new(state.focus), hints_area);
    }
}
