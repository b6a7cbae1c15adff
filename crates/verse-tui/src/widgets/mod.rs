//! Custom widget components

mod header;
mod key_hints;
mod recent_searches;
mod search_form;
mod verse_view;
mod wrap;

pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use recent_searches::RecentSearchesPanel;
pub use search_form::SearchForm;
pub use verse_view::{EmptyVerseView, VerseView};
pub use wrap::wrap_text;
