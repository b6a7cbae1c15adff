//! Main header widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Title bar showing the app name and the service being queried
pub struct MainHeader<'a> {
    base_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(" Verse Explorer", styles::accent_bold()),
            Span::styled("  ", styles::text_muted()),
            Span::styled(self.base_url.to_string(), styles::text_muted()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
