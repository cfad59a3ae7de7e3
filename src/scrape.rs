use std::fs;
use std::path::PathBuf;

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::names;
use crate::segment;
use crate::types::BibleDict;

/// Project Gutenberg HTML edition of the King James Bible.
pub const DEFAULT_URL: &str = "https://www.gutenberg.org/cache/epub/10/pg10-images.html";

/// Where the markup comes from. A closed set: callers pick one explicitly,
/// there is no auto-detection.
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

/// The two grouping headers that sit in `div.chapter` elements like the
/// books do but are not books themselves.
const TESTAMENT_HEADINGS: [&str; 2] = [
    "The Old Testament of the King James Version of the Bible",
    "The New Testament of the King James Bible",
];

/// Books whose first two `<p>` fragments carry extended-name preamble
/// ("otherwise called ...") instead of verse text.
const PREAMBLE_BOOKS: [&str; 5] = ["1 Kings", "2 Kings", "1 Samuel", "2 Samuel", "Ecclesiastes"];

/// Read the raw markup from the configured source. Unreachable sources are
/// fatal for the run.
pub fn load_markup(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => fs::read_to_string(path)
            .map_err(|e| Error::SourceUnavailable(format!("{}: {e}", path.display()))),
        Source::Url(url) => fetch(url),
    }
}

fn fetch(url: &str) -> Result<String> {
    info!(url, "fetching document");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::SourceUnavailable(format!("{url}: {e}")))?;
    response
        .text()
        .map_err(|e| Error::SourceUnavailable(format!("{url}: {e}")))
}

/// Scrape the full document into the ordered book -> verses dictionary.
///
/// Every book sits in a `div.chapter` with its long name in an `h2` and its
/// text spread across `p` elements that do not align with verse boundaries.
pub fn scrape_bible(html: &str) -> Result<BibleDict> {
    let document = Html::parse_document(html);
    let book_sel = selector("div.chapter");
    let heading_sel = selector("h2");
    let para_sel = selector("p");

    let mut bible = BibleDict::new();
    for div in document.select(&book_sel) {
        let heading = div
            .select(&heading_sel)
            .next()
            .map(|h2| normalize_ws(&h2.text().collect::<String>()))
            .ok_or_else(|| Error::MalformedTitle("(book division without heading)".into()))?;
        if TESTAMENT_HEADINGS.contains(&heading.as_str()) {
            continue;
        }

        let name = names::shorten_name(&heading)?;
        let mut fragments: Vec<String> = div
            .select(&para_sel)
            .map(|p| p.text().collect::<String>())
            .collect();
        if PREAMBLE_BOOKS.contains(&name.as_str()) {
            fragments.drain(..fragments.len().min(2));
        }

        debug!(book = %name, fragments = fragments.len(), "segmenting");
        let verses = segment::segment_verses(&name, &fragments)?;
        bible.insert(name, verses);
    }

    info!(books = bible.len(), "scraped document");
    Ok(bible)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Collapse runs of whitespace (headings can wrap across lines).
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
