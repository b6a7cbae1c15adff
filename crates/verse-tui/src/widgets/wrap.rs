//! Display-width aware word wrapping
//!
//! The verse view needs exact row counts to keep the commentary cursor in
//! view, so text is wrapped here instead of by `Paragraph::wrap`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to rows no wider than `width` display columns.
///
/// Embedded newlines are kept as row breaks, blank lines included. Words
/// wider than `width` are split across rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;

        for word in line.split_whitespace() {
            let word_width = word.width();

            if row_width > 0 && row_width + 1 + word_width <= width {
                row.push(' ');
                row.push_str(word);
                row_width += 1 + word_width;
                continue;
            }

            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push_str(word);
                row_width = word_width;
            } else {
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if row_width + cw > width && row_width > 0 {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                    row.push(c);
                    row_width += cw;
                }
            }
        }

        rows.push(row);
    }

    rows
}
