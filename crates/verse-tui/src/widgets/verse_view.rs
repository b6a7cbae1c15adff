//! Verse view widget: heading, verse text, transliteration and the
//! expandable commentary list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

use verse_app::VerseViewState;
use verse_core::{Commentary, Language, LanguageSection, VerseRecord};

use super::wrap::wrap_text;
use crate::theme::styles;

const TEXT_INDENT: usize = 2;
const SECTION_INDENT: usize = 4;
const FIELD_INDENT: usize = 6;

/// Renders one verse record. Expansion, cursor and scroll live in
/// [`VerseViewState`].
pub struct VerseView<'a> {
    record: &'a VerseRecord,
    focused: bool,
}

/// Laid-out content of the view
struct VerseContent {
    lines: Vec<Line<'static>>,
    /// Row span (`top..bottom`) of each commentary, header plus open panel
    commentary_rows: Vec<(u16, u16)>,
}

impl<'a> VerseView<'a> {
    pub fn new(record: &'a VerseRecord) -> Self {
        Self {
            record,
            focused: false,
        }
    }

    /// Highlight the commentary cursor as focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn build(&self, state: &VerseViewState, width: usize) -> VerseContent {
        let mut lines = Vec::new();
        let mut commentary_rows = Vec::with_capacity(self.record.commentaries.len());

        lines.push(Line::from(vec![
            Span::styled(self.record.heading(), styles::heading()),
            Span::styled(format!("  ID: {}", self.record.id), styles::text_muted()),
        ]));
        lines.push(Line::default());

        push_wrapped(&mut lines, &self.record.slok, TEXT_INDENT, width, styles::verse_text());
        lines.push(Line::default());
        push_wrapped(
            &mut lines,
            &self.record.transliteration,
            TEXT_INDENT,
            width,
            styles::transliteration(),
        );
        lines.push(Line::default());

        lines.push(Line::styled("Commentaries", styles::accent_bold()));
        if self.record.commentaries.is_empty() {
            lines.push(Line::styled("  (none)", styles::text_muted()));
        }

        for (index, commentary) in self.record.commentaries.iter().enumerate() {
            let top = row_index(&lines);
            let expanded = state.is_expanded(&commentary.commentator);
            lines.push(self.commentary_header(commentary, expanded, index == state.cursor));

            if expanded {
                for section in commentary.sections() {
                    push_section(&mut lines, &section, width);
                }
                lines.push(Line::default());
            }
            commentary_rows.push((top, row_index(&lines)));
        }

        VerseContent {
            lines,
            commentary_rows,
        }
    }

    fn commentary_header(
        &self,
        commentary: &Commentary,
        expanded: bool,
        at_cursor: bool,
    ) -> Line<'static> {
        let marker = if expanded { "▾" } else { "▸" };
        let name_style = match (at_cursor, self.focused) {
            (true, true) => styles::focused_selected(),
            (true, false) => styles::unfocused_selected(),
            (false, _) => styles::heading(),
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), styles::accent()),
            Span::styled(commentary.commentator.clone(), name_style),
        ];
        if let Some(author) = commentary.author() {
            spans.push(Span::styled(format!("  by {}", author), styles::text_muted()));
        }
        Line::from(spans)
    }
}

fn push_section(lines: &mut Vec<Line<'static>>, section: &LanguageSection<'_>, width: usize) {
    lines.push(Line::styled(
        format!("{}{}", " ".repeat(SECTION_INDENT), section.language.label()),
        styles::accent_bold(),
    ));

    if let Some(translation) = section.translation {
        push_label(lines, "Translation:");
        push_wrapped(lines, translation, FIELD_INDENT, width, styles::text_primary());
    }
    if let Some(commentary) = section.commentary {
        // Sanskrit carries commentary only and is shown without a label
        if section.language != Language::Sanskrit {
            push_label(lines, "Commentary:");
        }
        push_wrapped(lines, commentary, FIELD_INDENT, width, styles::text_primary());
    }
}

fn push_label(lines: &mut Vec<Line<'static>>, label: &str) {
    lines.push(Line::styled(
        format!("{}{}", " ".repeat(FIELD_INDENT), label),
        styles::text_secondary(),
    ));
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    indent: usize,
    width: usize,
    style: ratatui::style::Style,
) {
    let pad = " ".repeat(indent);
    for row in wrap_text(text, width.saturating_sub(indent)) {
        lines.push(Line::styled(format!("{}{}", pad, row), style));
    }
}

fn row_index(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

impl StatefulWidget for VerseView<'_> {
    type State = VerseViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.focused).title(" Verse ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content = self.build(state, inner.width as usize);

        if state.follow_cursor {
            if let Some(&(top, bottom)) = content.commentary_rows.get(state.cursor) {
                state.reveal(top, bottom, inner.height);
            }
            state.follow_cursor = false;
        }
        state.clamp_scroll(row_index(&content.lines).saturating_sub(inner.height));

        Paragraph::new(content.lines)
            .scroll((state.scroll, 0))
            .render(inner, buf);
    }
}

/// Placeholder shown before the first successful lookup
pub struct EmptyVerseView;

impl Widget for EmptyVerseView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block: Block<'static> = styles::glass_block(false).title(" Verse ");
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::styled(
            "Enter a chapter and verse, then press Enter",
            styles::text_muted(),
        ))
        .render(inner, buf);
    }
}
