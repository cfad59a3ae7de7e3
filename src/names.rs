use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static LAST_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)$").unwrap());

const ORDINALS: &[(&str, &str)] = &[("First", "1"), ("Second", "2"), ("Third", "3")];

/// Shorten a long book heading to its canonical name, e.g.
/// "The First Book of Samuel" -> "1 Samuel". Rules are checked in order and
/// the first match wins; special cases come before the ordinal and
/// last-word fallbacks because headings like "The Revelation of Saint John
/// the Divine" would otherwise shorten to the wrong token.
pub fn shorten_name(long_name: &str) -> Result<String> {
    if long_name.contains("Revelation") {
        return Ok("Revelation".to_string());
    }
    if long_name.contains("Acts") {
        return Ok("Acts".to_string());
    }
    if long_name.contains("Lamentations") {
        return Ok("Lamentations".to_string());
    }
    if long_name.contains("Solomon") {
        return Ok("Song of Songs".to_string());
    }
    // The five books of Moses are "The <Ordinal> Book of Moses: Called X";
    // the ordinal refers to Moses, not the book, so keep the last word.
    if long_name.contains("Moses") {
        return last_word(long_name);
    }
    for (word, digit) in ORDINALS {
        if long_name.contains(word) {
            return Ok(format!("{} {}", digit, last_word(long_name)?));
        }
    }
    last_word(long_name)
}

/// Trailing word token of the heading, or `MalformedTitle` if there is none.
fn last_word(long_name: &str) -> Result<String> {
    LAST_WORD_RE
        .captures(long_name)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::MalformedTitle(long_name.to_string()))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_samuel() {
        assert_eq!(
            shorten_name("The First Book of Samuel").unwrap(),
            "1 Samuel"
        );
    }

    #[test]
    fn ordinals_map_to_digits() {
        assert_eq!(
            shorten_name("The Second Book of the Kings").unwrap(),
            "2 Kings"
        );
        assert_eq!(
            shorten_name("The Third Epistle of John").unwrap(),
            "3 John"
        );
    }

    #[test]
    fn moses_books_keep_called_name() {
        assert_eq!(
            shorten_name("The First Book of Moses: Called Genesis").unwrap(),
            "Genesis"
        );
        assert_eq!(
            shorten_name("The Second Book of Moses: Called Exodus").unwrap(),
            "Exodus"
        );
    }

    #[test]
    fn special_cases_win_over_fallbacks() {
        assert_eq!(
            shorten_name("The Revelation of Saint John the Divine").unwrap(),
            "Revelation"
        );
        assert_eq!(shorten_name("The Acts of the Apostles").unwrap(), "Acts");
        assert_eq!(
            shorten_name("The Lamentations of Jeremiah").unwrap(),
            "Lamentations"
        );
        assert_eq!(
            shorten_name("The Song of Solomon").unwrap(),
            "Song of Songs"
        );
    }

    #[test]
    fn default_keeps_last_word() {
        assert_eq!(
            shorten_name("The Gospel According to Saint Matthew").unwrap(),
            "Matthew"
        );
        assert_eq!(shorten_name("The General Epistle of James").unwrap(), "James");
    }

    #[test]
    fn headings_without_a_word_token_fail() {
        assert!(matches!(
            shorten_name(""),
            Err(Error::MalformedTitle(_))
        ));
        assert!(matches!(
            shorten_name("???"),
            Err(Error::MalformedTitle(_))
        ));
    }
}
