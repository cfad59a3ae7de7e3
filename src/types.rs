use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Typed chapter:verse reference. Renders as `"C:V"` everywhere the outside
/// world sees it (snapshot keys, concordance entries) so the snapshot format
/// stays compatible with plain string-keyed consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chapter, verse) = s
            .split_once(':')
            .ok_or_else(|| format!("expected \"C:V\", got {s:?}"))?;
        let chapter = chapter
            .parse()
            .map_err(|_| format!("bad chapter number in {s:?}"))?;
        let verse = verse
            .parse()
            .map_err(|_| format!("bad verse number in {s:?}"))?;
        Ok(Self { chapter, verse })
    }
}

impl Serialize for VerseRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One hit in the concordance: which book and which verse a word occurred
/// in. Renders as `"Book C:V"`; book names may themselves contain spaces
/// ("Song of Songs", "1 Samuel") so parsing splits on the *last* space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub book: String,
    pub vref: VerseRef,
}

impl Occurrence {
    pub fn new(book: impl Into<String>, vref: VerseRef) -> Self {
        Self {
            book: book.into(),
            vref,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.vref)
    }
}

impl FromStr for Occurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (book, vref) = s
            .rsplit_once(' ')
            .ok_or_else(|| format!("expected \"Book C:V\", got {s:?}"))?;
        if book.is_empty() {
            return Err(format!("missing book name in {s:?}"));
        }
        Ok(Self {
            book: book.to_string(),
            vref: vref.parse()?,
        })
    }
}

impl Serialize for Occurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Occurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One book's verses, in source order.
pub type BookVerses = IndexMap<VerseRef, String>;

/// The whole document: book name -> verses, books in source order.
pub type BibleDict = IndexMap<String, BookVerses>;

/// Global word index: lowercased word -> every occurrence, in book-then-verse
/// order, duplicates kept (one entry per occurrence, not per verse).
pub type Concordance = IndexMap<String, Vec<Occurrence>>;

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_ref_round_trips_through_display() {
        let vref = VerseRef::new(6, 18);
        assert_eq!(vref.to_string(), "6:18");
        assert_eq!("6:18".parse::<VerseRef>().unwrap(), vref);
    }

    #[test]
    fn verse_ref_rejects_garbage() {
        assert!("6".parse::<VerseRef>().is_err());
        assert!("a:b".parse::<VerseRef>().is_err());
        assert!("".parse::<VerseRef>().is_err());
    }

    #[test]
    fn occurrence_parses_multi_word_book_names() {
        let occ: Occurrence = "Song of Songs 2:4".parse().unwrap();
        assert_eq!(occ.book, "Song of Songs");
        assert_eq!(occ.vref, VerseRef::new(2, 4));
        assert_eq!(occ.to_string(), "Song of Songs 2:4");
    }

    #[test]
    fn occurrence_rejects_missing_book() {
        assert!("2:4".parse::<Occurrence>().is_err());
        assert!(" 2:4".parse::<Occurrence>().is_err());
    }

    #[test]
    fn verse_map_serializes_with_string_keys() {
        let mut verses = BookVerses::new();
        verses.insert(VerseRef::new(1, 1), "In the beginning".to_string());
        verses.insert(VerseRef::new(1, 2), "And the earth".to_string());
        let json = serde_json::to_string(&verses).unwrap();
        assert_eq!(json, r#"{"1:1":"In the beginning","1:2":"And the earth"}"#);

        let back: BookVerses = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verses);
        let keys: Vec<_> = back.keys().copied().collect();
        assert_eq!(keys, vec![VerseRef::new(1, 1), VerseRef::new(1, 2)]);
    }
}
