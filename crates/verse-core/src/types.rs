//! Verse data model shared by the client, the app state and the view

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the recent-search list
pub const MAX_RECENT_SEARCHES: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Verse record (wire format)
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque verse identifier. The service may send either a string
/// (`"BG2.47"`) or a bare number; it is only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseId {
    Number(i64),
    Text(String),
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseId::Number(n) => write!(f, "{n}"),
            VerseId::Text(s) => f.write_str(s),
        }
    }
}

/// A single verse with its commentaries, as returned by the lookup service.
///
/// Records are never edited after they are received; showing a different
/// verse replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub id: VerseId,
    pub chapter: u32,
    pub verse: u32,
    /// Original verse text (multi-line)
    #[serde(default)]
    pub slok: String,
    /// Romanized rendering of the verse (multi-line)
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub commentaries: Vec<Commentary>,
}

impl VerseRecord {
    /// "Chapter {chapter}, Verse {verse}"
    pub fn heading(&self) -> String {
        format!("Chapter {}, Verse {}", self.chapter, self.verse)
    }

    /// Find a commentary by its commentator name
    pub fn commentary(&self, commentator: &str) -> Option<&Commentary> {
        self.commentaries
            .iter()
            .find(|c| c.commentator == commentator)
    }

    pub fn has_commentator(&self, commentator: &str) -> bool {
        self.commentary(commentator).is_some()
    }
}

/// One commentator's translations and commentary across up to three languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    /// Display name; also the identity key for expand/collapse state
    pub commentator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Back-reference emitted by the service, not used by the UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanskrit_commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi_commentary: Option<String>,
}

impl Commentary {
    pub fn new(commentator: impl Into<String>) -> Self {
        Self {
            commentator: commentator.into(),
            ..Default::default()
        }
    }

    /// Author attribution, if present and non-empty
    pub fn author(&self) -> Option<&str> {
        present(&self.author)
    }

    /// Language sections that have at least one field to show, in display
    /// order (English, Sanskrit, Hindi).
    pub fn sections(&self) -> Vec<LanguageSection<'_>> {
        [
            LanguageSection {
                language: Language::English,
                translation: present(&self.english_translation),
                commentary: present(&self.english_commentary),
            },
            LanguageSection {
                language: Language::Sanskrit,
                translation: None,
                commentary: present(&self.sanskrit_commentary),
            },
            LanguageSection {
                language: Language::Hindi,
                translation: present(&self.hindi_translation),
                commentary: present(&self.hindi_commentary),
            },
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect()
    }
}

/// Empty strings count as absent, same as a missing field
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Commentary languages, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Sanskrit,
    Hindi,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Sanskrit => "Sanskrit",
            Language::Hindi => "Hindi",
        }
    }
}

/// The fields of one commentary that belong to a single language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSection<'a> {
    pub language: Language,
    pub translation: Option<&'a str>,
    pub commentary: Option<&'a str>,
}

impl LanguageSection<'_> {
    pub fn is_empty(&self) -> bool {
        self.translation.is_none() && self.commentary.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries and recent searches
// ─────────────────────────────────────────────────────────────────────────────

/// A chapter/verse pair exactly as typed in the search form.
///
/// Values are not parsed as integers; they are sent to the service verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseQuery {
    pub chapter: String,
    pub verse: String,
}

impl VerseQuery {
    pub fn new(chapter: impl Into<String>, verse: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }

    /// Both fields hold a value
    pub fn is_complete(&self) -> bool {
        !self.chapter.is_empty() && !self.verse.is_empty()
    }

    pub fn label(&self) -> String {
        format!("Chapter {}, Verse {}", self.chapter, self.verse)
    }
}

/// Most-recent-first list of successful queries, capped at
/// [`MAX_RECENT_SEARCHES`]. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: VecDeque<VerseQuery>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a query and drop the oldest entry past the cap
    pub fn record(&mut self, query: VerseQuery) {
        self.entries.push_front(query);
        self.entries.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn get(&self, index: usize) -> Option<&VerseQuery> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerseQuery> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "BG2.47",
        "chapter": 2,
        "verse": 47,
        "slok": "line one\nline two",
        "transliteration": "karmaṇy evādhikāras te",
        "commentaries": [
            {
                "verse_id": "BG2.47",
                "commentator": "Shankara",
                "author": "Adi Shankaracharya",
                "english_translation": "T1",
                "sanskrit_commentary": "S1"
            },
            { "commentator": "Ramanuja", "hindi_commentary": "H1" }
        ]
    }"#;

    #[test]
    fn test_parse_full_record() {
        let record: VerseRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.id, VerseId::Text("BG2.47".into()));
        assert_eq!(record.chapter, 2);
        assert_eq!(record.verse, 47);
        assert_eq!(record.slok, "line one\nline two");
        assert_eq!(record.commentaries.len(), 2);
        assert_eq!(record.commentaries[0].author(), Some("Adi Shankaracharya"));
        assert_eq!(record.commentaries[1].author(), None);
    }

    #[test]
    fn test_numeric_id() {
        let record: VerseRecord =
            serde_json::from_str(r#"{"id": 1, "chapter": 2, "verse": 47}"#).unwrap();
        assert_eq!(record.id, VerseId::Number(1));
        assert_eq!(record.id.to_string(), "1");
        assert!(record.slok.is_empty());
        assert!(record.commentaries.is_empty());
    }

    #[test]
    fn test_heading() {
        let record: VerseRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.heading(), "Chapter 2, Verse 47");
    }

    #[test]
    fn test_commentary_lookup_by_name() {
        let record: VerseRecord = serde_json::from_str(SAMPLE).unwrap();
        assert!(record.has_commentator("Ramanuja"));
        assert!(!record.has_commentator("Madhva"));
    }

    #[test]
    fn test_sections_skip_empty_languages() {
        let record: VerseRecord = serde_json::from_str(SAMPLE).unwrap();

        let sections = record.commentaries[0].sections();
        let languages: Vec<Language> = sections.iter().map(|s| s.language).collect();
        assert_eq!(languages, vec![Language::English, Language::Sanskrit]);
        assert_eq!(sections[0].translation, Some("T1"));
        assert_eq!(sections[0].commentary, None);

        let sections = record.commentaries[1].sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].language, Language::Hindi);
        assert_eq!(sections[0].commentary, Some("H1"));
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let mut commentary = Commentary::new("Madhva");
        commentary.hindi_translation = Some(String::new());
        commentary.hindi_commentary = Some(String::new());
        commentary.author = Some(String::new());

        assert!(commentary.sections().is_empty());
        assert_eq!(commentary.author(), None);
    }

    #[test]
    fn test_query_completeness() {
        assert!(VerseQuery::new("2", "47").is_complete());
        assert!(!VerseQuery::new("", "47").is_complete());
        assert!(!VerseQuery::new("2", "").is_complete());
        assert_eq!(VerseQuery::new("2", "47").label(), "Chapter 2, Verse 47");
    }

    #[test]
    fn test_recent_searches_keep_five_most_recent() {
        let mut recent = RecentSearches::new();
        for verse in 1..=6 {
            recent.record(VerseQuery::new("1", verse.to_string()));
        }

        assert_eq!(recent.len(), MAX_RECENT_SEARCHES);
        let verses: Vec<&str> = recent.iter().map(|q| q.verse.as_str()).collect();
        assert_eq!(verses, vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn test_recent_searches_allow_duplicates() {
        let mut recent = RecentSearches::new();
        recent.record(VerseQuery::new("2", "47"));
        recent.record(VerseQuery::new("2", "47"));

        assert_eq!(recent.len(), 2);
        assert_eq!(recent.get(0), recent.get(1));
    }
}
