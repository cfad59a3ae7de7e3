use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{BookVerses, VerseRef};

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+:\d+").unwrap());

/// Rebuild one book's text stream and split it into an ordered verse map.
///
/// The source `<p>` fragments do not line up with verse boundaries: one
/// fragment can hold several verses and one verse can span fragments.
/// Joining everything into a single string and re-splitting on the `C:V`
/// markers is what recovers the verses. Any text before the first marker is
/// heading boilerplate left over from extraction and is dropped.
pub fn segment_verses(book: &str, fragments: &[String]) -> Result<BookVerses> {
    if fragments.is_empty() {
        return Err(malformed(book, "no text fragments"));
    }

    let joined = fragments
        .iter()
        .map(|f| f.replace('\n', " ").trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let markers: Vec<regex::Match> = MARKER_RE.find_iter(&joined).collect();
    if markers.is_empty() {
        return Err(malformed(book, "no verse markers in text"));
    }

    let mut verses = BookVerses::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let start = marker.end();
        let end = markers.get(i + 1).map_or(joined.len(), |next| next.start());
        let text = joined[start..end].trim();
        if text.is_empty() {
            return Err(malformed(
                book,
                &format!("marker {} has no verse text", marker.as_str()),
            ));
        }
        let vref: VerseRef = marker
            .as_str()
            .parse()
            .map_err(|e: String| malformed(book, &e))?;
        verses.insert(vref, text.to_string());
    }

    Ok(verses)
}

fn malformed(book: &str, reason: &str) -> Error {
    Error::MalformedSection {
        book: book.to_string(),
        reason: reason.to_string(),
    }
}

// ── Tests ──
