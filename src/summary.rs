use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{BibleDict, BookVerses, VerseRef};

// Word characters plus hyphen, so "Beth-el" stays one token. Everything
// else is a separator; there is no stopword filtering.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w-]+").unwrap());

/// Derived per-book statistics and word index. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Highest chapter number in the book.
    pub chapters: u32,
    /// Chapter -> highest verse number, keyed 1..=chapters in order.
    pub max_verses: IndexMap<u32, u32>,
    /// Lowercased word -> total occurrences in this book.
    pub word_counts: IndexMap<String, u32>,
    /// Lowercased word -> every verse it occurs in, in scan order,
    /// duplicates kept (a word twice in one verse appears twice).
    pub word_locations: IndexMap<String, Vec<VerseRef>>,
}

/// All books' summaries, in the same order as the bible dictionary.
pub type BookSummaries = IndexMap<String, BookSummary>;

/// Derive one book's summary from its verse map. Pure: does not touch or
/// alias the input beyond reading it.
pub fn summarize(verses: &BookVerses) -> BookSummary {
    let chapters = verses.keys().map(|v| v.chapter).max().unwrap_or(0);

    let mut max_verses = IndexMap::with_capacity(chapters as usize);
    for chapter in 1..=chapters {
        let max_verse = verses
            .keys()
            .filter(|v| v.chapter == chapter)
            .map(|v| v.verse)
            .max()
            .unwrap_or(0);
        max_verses.insert(chapter, max_verse);
    }

    let mut word_counts: IndexMap<String, u32> = IndexMap::new();
    let mut word_locations: IndexMap<String, Vec<VerseRef>> = IndexMap::new();
    for (vref, text) in verses {
        for token in WORD_RE.find_iter(text) {
            let word = token.as_str().to_lowercase();
            *word_counts.entry(word.clone()).or_insert(0) += 1;
            word_locations.entry(word).or_default().push(*vref);
        }
    }

    BookSummary {
        chapters,
        max_verses,
        word_counts,
        word_locations,
    }
}

/// Summaries for every book, preserving book order.
pub fn summarize_all(bible: &BibleDict) -> BookSummaries {
    bible
        .iter()
        .map(|(name, verses)| (name.clone(), summarize(verses)))
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn verses(entries: &[(u32, u32, &str)]) -> BookVerses {
        entries
            .iter()
            .map(|&(c, v, text)| (VerseRef::new(c, v), text.to_string()))
            .collect()
    }

    #[test]
    fn chapter_and_verse_maxima() {
        let summary = summarize(&verses(&[
            (1, 1, "a"),
            (1, 2, "b"),
            (1, 3, "c"),
            (2, 1, "d"),
            (2, 2, "e"),
        ]));
        assert_eq!(summary.chapters, 2);
        let maxima: Vec<(u32, u32)> = summary.max_verses.iter().map(|(c, v)| (*c, *v)).collect();
        assert_eq!(maxima, vec![(1, 3), (2, 2)]);
    }

    #[test]
    fn words_lowercased_and_counted() {
        let summary = summarize(&verses(&[
            (1, 1, "And God said, Let there be light: and there was light."),
        ]));
        assert_eq!(summary.word_counts["and"], 2);
        assert_eq!(summary.word_counts["light"], 2);
        assert_eq!(summary.word_counts["god"], 1);
        // "said," loses its comma; no token keeps punctuation.
        assert!(summary.word_counts.contains_key("said"));
        assert!(!summary.word_counts.keys().any(|w| w.contains(',')));
    }

    #[test]
    fn hyphenated_names_stay_one_token() {
        let summary = summarize(&verses(&[(1, 1, "Jacob went out from Beth-el.")]));
        assert_eq!(summary.word_counts["beth-el"], 1);
        assert!(!summary.word_counts.contains_key("beth"));
    }

    #[test]
    fn duplicate_occurrences_in_one_verse_kept() {
        let summary = summarize(&verses(&[(3, 7, "holy holy holy")]));
        assert_eq!(summary.word_counts["holy"], 3);
        assert_eq!(
            summary.word_locations["holy"],
            vec![VerseRef::new(3, 7); 3]
        );
    }

    #[test]
    fn locations_follow_scan_order() {
        let summary = summarize(&verses(&[
            (1, 1, "light above"),
            (1, 2, "no match"),
            (2, 1, "light below"),
        ]));
        assert_eq!(
            summary.word_locations["light"],
            vec![VerseRef::new(1, 1), VerseRef::new(2, 1)]
        );
    }
}
