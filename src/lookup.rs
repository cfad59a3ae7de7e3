use std::path::Path;

use crate::error::Result;
use crate::snapshot;
use crate::summary::BookSummaries;
use crate::types::{BibleDict, Concordance, Occurrence, VerseRef};

/// The three persisted structures, loaded once at startup and queried
/// read-only from then on. Misses are `None`, never errors: an unknown word
/// or reference is ordinary control flow for the caller to present.
pub struct BibleData {
    pub bible: BibleDict,
    pub summaries: BookSummaries,
    pub concordance: Concordance,
}

impl BibleData {
    /// Load all three snapshots from `dir` using their default file names.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            bible: snapshot::read_bible(&dir.join(snapshot::BIBLE_SNAPSHOT))?,
            summaries: snapshot::read_summaries(&dir.join(snapshot::SUMMARY_SNAPSHOT))?,
            concordance: snapshot::read_concordance(&dir.join(snapshot::CONCORDANCE_SNAPSHOT))?,
        })
    }

    /// Text of one verse, or `None` for an unknown reference.
    pub fn verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.bible
            .get(book)?
            .get(&VerseRef::new(chapter, verse))
            .map(String::as_str)
    }

    /// Every occurrence of a word, case-insensitive. `None` when the word
    /// appears nowhere in the text.
    pub fn word(&self, word: &str) -> Option<&[Occurrence]> {
        self.concordance
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Number of chapters in a book.
    pub fn chapter_count(&self, book: &str) -> Option<u32> {
        self.summaries.get(book).map(|s| s.chapters)
    }

    /// Highest verse number of one chapter.
    pub fn max_verse(&self, book: &str, chapter: u32) -> Option<u32> {
        self.summaries.get(book)?.max_verses.get(&chapter).copied()
    }

    /// Ordered book names split into Old and New Testament lists. The split
    /// point is "Matthew", the first New Testament book in source order.
    pub fn testaments(&self) -> (Vec<&str>, Vec<&str>) {
        let books: Vec<&str> = self.bible.keys().map(String::as_str).collect();
        let split = books
            .iter()
            .position(|b| *b == "Matthew")
            .unwrap_or(books.len());
        (books[..split].to_vec(), books[split..].to_vec())
    }
}

// ── Tests ──
