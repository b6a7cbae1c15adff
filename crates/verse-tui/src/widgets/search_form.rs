//! Search form widget: chapter and verse fields, submit control and the
//! inline error panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use verse_app::{Focus, SearchField, SearchState};

use super::wrap::wrap_text;
use crate::theme::styles;

/// Braille spinner frames shown while a lookup is in flight
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Columns reserved for a field value inside its brackets
const FIELD_WIDTH: usize = 5;

/// Rows available to the error message below its title
const ERROR_MESSAGE_ROWS: usize = 2;

pub struct SearchForm<'a> {
    search: &'a SearchState,
    focus: Focus,
}

impl<'a> SearchForm<'a> {
    pub fn new(search: &'a SearchState, focus: Focus) -> Self {
        Self { search, focus }
    }

    fn field_spans(&self, label: &'static str, field: SearchField) -> Vec<Span<'static>> {
        let focused = self.focus.field() == Some(field);
        let value = self.search.field(field);
        let shown = if focused {
            format!("{}_", value)
        } else {
            value.to_string()
        };

        let bracket_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        vec![
            Span::styled(label, styles::text_secondary()),
            Span::styled("[", bracket_style),
            Span::styled(
                format!("{:<width$}", shown, width = FIELD_WIDTH),
                styles::text_primary(),
            ),
            Span::styled("]", bracket_style),
        ]
    }

    fn submit_line(&self) -> Line<'static> {
        let (text, style): (String, Style) = if self.search.loading {
            let frame = (self.search.animation_frame as usize) % SPINNER.len();
            (
                format!("[ {} Searching... ]", SPINNER[frame]),
                styles::text_muted(),
            )
        } else if self.search.can_submit() {
            ("[ Search Verse ]".to_string(), styles::accent_bold())
        } else {
            ("[ Search Verse ]".to_string(), styles::text_muted())
        };
        Line::from(Span::styled(text, style))
    }
}

/// Wrap `message` to `width`, ending the last visible row with `…` when
/// the message needs more than [`ERROR_MESSAGE_ROWS`]
fn error_rows(message: &str, width: usize) -> Vec<String> {
    let mut rows = wrap_text(message, width);
    if rows.len() > ERROR_MESSAGE_ROWS {
        rows.truncate(ERROR_MESSAGE_ROWS);
        if let Some(last) = rows.last_mut() {
            let keep = last.chars().count().min(width.saturating_sub(1));
            *last = last.chars().take(keep).collect::<String>() + "…";
        }
    }
    rows
}

impl Widget for SearchForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus.field().is_some();
        let block = styles::glass_block(focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut fields = self.field_spans("Chapter ", SearchField::Chapter);
        fields.push(Span::raw("   "));
        fields.extend(self.field_spans("Verse ", SearchField::Verse));

        let mut lines = vec![Line::from(fields), Line::default(), self.submit_line()];

        if let Some(error) = &self.search.error {
            lines.push(Line::styled("Error", styles::error_title()));
            for row in error_rows(error, inner.width as usize) {
                lines.push(Line::styled(row, styles::status_red()));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
