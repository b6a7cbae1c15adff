//! Key hint line for the focused panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use verse_app::Focus;

use crate::theme::styles;

pub struct KeyHints {
    focus: Focus,
}

impl KeyHints {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Chapter | Focus::Verse => &[
                ("0-9", "type"),
                ("Enter", "search"),
                ("^U", "clear"),
                ("Tab", "next"),
                ("Esc", "quit"),
            ],
            Focus::Recent => &[
                ("←/→", "select"),
                ("Enter", "search"),
                ("Tab", "next"),
                ("q", "quit"),
            ],
            Focus::Commentaries => &[
                ("↑/↓", "move"),
                ("Enter", "expand"),
                ("PgUp/PgDn", "scroll"),
                ("Tab", "next"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
