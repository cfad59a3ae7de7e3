use crate::summary::BookSummaries;
use crate::types::{Concordance, Occurrence};

/// Fold every book's word locations into the global concordance. A pure
/// concatenation in book order: a word's final list is its per-book lists
/// back to back, never re-sorted and never deduplicated.
pub fn build_concordance(summaries: &BookSummaries) -> Concordance {
    let mut concordance = Concordance::new();
    for (book, summary) in summaries {
        for (word, locations) in &summary.word_locations {
            concordance
                .entry(word.clone())
                .or_default()
                .extend(locations.iter().map(|vref| Occurrence::new(book, *vref)));
        }
    }
    concordance
}

// ── Tests ──
